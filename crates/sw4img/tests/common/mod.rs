//! Helpers for building SW4 image files in tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

pub const CREATION_TIME: &str = "Wed Jun 17 09:30:00 2015";

/// Header fields in file order.
#[derive(Debug, Clone)]
pub struct Header {
    pub precision: i32,
    pub number_of_patches: i32,
    pub time: f64,
    pub plane: i32,
    pub coordinate: f64,
    pub mode: i32,
    pub grid_info: i32,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            precision: 8,
            number_of_patches: 1,
            time: 1.5,
            plane: 0,
            coordinate: 0.0,
            mode: 1,
            grid_info: 0,
        }
    }
}

/// Accumulates the bytes of an image file.
#[derive(Debug, Default)]
pub struct FileBuilder {
    bytes: Vec<u8>,
}

impl FileBuilder {
    pub fn new(header: &Header) -> Self {
        let mut b = FileBuilder::default();
        b.i32(header.precision)
            .i32(header.number_of_patches)
            .f64(header.time)
            .i32(header.plane)
            .f64(header.coordinate)
            .i32(header.mode)
            .i32(header.grid_info);
        let mut text = [0u8; 25];
        text[..CREATION_TIME.len()].copy_from_slice(CREATION_TIME.as_bytes());
        b.bytes.extend_from_slice(&text);
        b
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    /// Patch descriptor with `ib = jb = 1`.
    pub fn descriptor(&mut self, h: f64, zmin: f64, ni: i32, nj: i32) -> &mut Self {
        self.f64(h).f64(zmin).i32(1).i32(ni).i32(1).i32(nj)
    }

    pub fn f64_samples(&mut self, values: &[f64]) -> &mut Self {
        for &v in values {
            self.f64(v);
        }
        self
    }

    pub fn f32_samples(&mut self, values: &[f32]) -> &mut Self {
        for &v in values {
            self.f32(v);
        }
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Write `bytes` to `name` inside `dir`.
pub fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}
