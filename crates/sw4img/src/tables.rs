//! Lookup tables that turn header codes into semantic values.
//!
//! The simulator stores precision, plane and mode as small integer codes. Any
//! code outside a table's domain is reported as [`Error::UnknownCode`].

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Identifies which lookup table rejected a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTable {
    Precision,
    Plane,
    Mode,
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeTable::Precision => write!(f, "precision"),
            CodeTable::Plane => write!(f, "plane"),
            CodeTable::Mode => write!(f, "mode"),
        }
    }
}

/// Width of one stored sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// 4-byte IEEE single precision.
    #[default]
    Single,
    /// 8-byte IEEE double precision.
    Double,
}

impl Precision {
    /// Resolve a header precision code (the sample width in bytes).
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            4 => Ok(Precision::Single),
            8 => Ok(Precision::Double),
            _ => Err(Error::UnknownCode {
                table: CodeTable::Precision,
                code,
            }),
        }
    }

    /// Bytes per sample.
    pub const fn width(self) -> usize {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }
}

/// The fixed axis a 2-D image slice is orthogonal to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plane {
    #[default]
    X,
    Y,
    Z,
}

impl Plane {
    /// Resolve a header plane code: 0 = X, 1 = Y, 2 = Z.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Plane::X),
            1 => Ok(Plane::Y),
            2 => Ok(Plane::Z),
            _ => Err(Error::UnknownCode {
                table: CodeTable::Plane,
                code,
            }),
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Plane::X => 0,
            Plane::Y => 1,
            Plane::Z => 2,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plane::X => write!(f, "X"),
            Plane::Y => write!(f, "Y"),
            Plane::Z => write!(f, "Z"),
        }
    }
}

/// Error returned when a plane token is not `x`, `y` or `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePlaneError;

impl fmt::Display for ParsePlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plane must be one of x, y, z")
    }
}

impl FromStr for Plane {
    type Err = ParsePlaneError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Plane::X),
            "y" | "Y" => Ok(Plane::Y),
            "z" | "Z" => Ok(Plane::Z),
            _ => Err(ParsePlaneError),
        }
    }
}

/// A recorded quantity and the physical unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub code: i32,
    pub name: &'static str,
    pub unit: &'static str,
}

const fn mode(code: i32, name: &'static str, unit: &'static str) -> Mode {
    Mode { code, name, unit }
}

/// Image modes in code order. The index of each entry is its code.
pub const MODES: [Mode; 40] = [
    mode(0, "none", ""),
    mode(1, "ux", "m"),
    mode(2, "uy", "m"),
    mode(3, "uz", "m"),
    mode(4, "rho", "kg/m^3"),
    mode(5, "lambda", "Pa"),
    mode(6, "mu", "Pa"),
    mode(7, "p", "m/s"),
    mode(8, "s", "m/s"),
    mode(9, "ux_exact", "m"),
    mode(10, "uy_exact", "m"),
    mode(11, "uz_exact", "m"),
    mode(12, "div", "1/s"),
    mode(13, "curl", "1/s"),
    mode(14, "divdt", "1/s^2"),
    mode(15, "curldt", "1/s^2"),
    mode(16, "lat", "degrees"),
    mode(17, "lon", "degrees"),
    mode(18, "topo", "m"),
    mode(19, "gridx", "m"),
    mode(20, "gridy", "m"),
    mode(21, "gridz", "m"),
    mode(22, "ux_err", "m"),
    mode(23, "uy_err", "m"),
    mode(24, "uz_err", "m"),
    mode(25, "velmag", "m/s"),
    mode(26, "hvelmag", "m/s"),
    mode(27, "hvelmax", "m/s"),
    mode(28, "vvelmax", "m/s"),
    mode(29, "dispmag", "m"),
    mode(30, "hdispmag", "m"),
    mode(31, "hdispmax", "m"),
    mode(32, "vdispmax", "m"),
    mode(33, "gradrho", "kg/m^4"),
    mode(34, "gradmu", "Pa/m"),
    mode(35, "gradlambda", "Pa/m"),
    mode(36, "gradp", "1/s"),
    mode(37, "grads", "1/s"),
    mode(38, "qp", ""),
    mode(39, "qs", ""),
];

/// Codes must equal their index so lookups can index directly, and every
/// entry other than `none` needs a name.
const fn mode_table_is_well_formed(table: &[Mode]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].code != i as i32 {
            return false;
        }
        if table[i].name.is_empty() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(mode_table_is_well_formed(&MODES));

impl Mode {
    /// Resolve a header mode code.
    pub fn from_code(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| MODES.get(i))
            .copied()
            .ok_or(Error::UnknownCode {
                table: CodeTable::Mode,
                code,
            })
    }

    /// Find a mode by the name used in image file names.
    pub fn from_name(name: &str) -> Option<Self> {
        MODES.iter().find(|m| m.name == name).copied()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} [{}]", self.name, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn precision_codes() {
        assert_eq!(Precision::from_code(4).unwrap(), Precision::Single);
        assert_eq!(Precision::from_code(8).unwrap(), Precision::Double);
        assert_eq!(Precision::Single.width(), 4);
        assert_eq!(Precision::Double.width(), 8);
    }

    #[test]
    fn precision_unknown_code() {
        for code in [0, 1, 2, 16, -4] {
            let err = Precision::from_code(code).unwrap_err();
            assert!(matches!(
                err,
                Error::UnknownCode {
                    table: CodeTable::Precision,
                    code: c
                } if c == code
            ));
        }
    }

    #[test]
    fn plane_codes_round_trip() {
        for plane in [Plane::X, Plane::Y, Plane::Z] {
            assert_eq!(Plane::from_code(plane.code()).unwrap(), plane);
        }
    }

    #[test]
    fn plane_unknown_code() {
        let err = Plane::from_code(9).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownCode {
                table: CodeTable::Plane,
                code: 9
            }
        ));
    }

    #[test]
    fn plane_from_str() {
        assert_eq!("x".parse::<Plane>(), Ok(Plane::X));
        assert_eq!("Y".parse::<Plane>(), Ok(Plane::Y));
        assert_eq!("z".parse::<Plane>(), Ok(Plane::Z));
        assert_eq!("w".parse::<Plane>(), Err(ParsePlaneError));
        assert_eq!("".parse::<Plane>(), Err(ParsePlaneError));
    }

    #[test]
    fn plane_display() {
        assert_eq!(Plane::Z.to_string(), "Z");
    }

    #[test]
    fn mode_lookup() {
        let ux = Mode::from_code(1).unwrap();
        assert_eq!(ux.name, "ux");
        assert_eq!(ux.unit, "m");

        let rho = Mode::from_code(4).unwrap();
        assert_eq!(rho.name, "rho");
        assert_eq!(rho.unit, "kg/m^3");

        let qs = Mode::from_code(39).unwrap();
        assert_eq!(qs.name, "qs");
    }

    #[test]
    fn mode_unknown_code() {
        for code in [-1, 40, i32::MAX, i32::MIN] {
            let err = Mode::from_code(code).unwrap_err();
            assert!(matches!(
                err,
                Error::UnknownCode {
                    table: CodeTable::Mode,
                    ..
                }
            ));
        }
    }

    #[test]
    fn mode_from_name() {
        assert_eq!(Mode::from_name("velmag").unwrap().code, 25);
        assert_eq!(Mode::from_name("nope"), None);
    }

    #[test]
    fn mode_names_are_unique() {
        for (i, a) in MODES.iter().enumerate() {
            for b in &MODES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::from_code(7).unwrap().to_string(), "p [m/s]");
        assert_eq!(Mode::from_code(38).unwrap().to_string(), "qp");
    }

    #[test]
    fn table_validation_rejects_gaps() {
        let gapped = [mode(0, "none", ""), mode(2, "uy", "m")];
        assert!(!mode_table_is_well_formed(&gapped));
        let unnamed = [mode(0, "", "")];
        assert!(!mode_table_is_well_formed(&unnamed));
    }
}
