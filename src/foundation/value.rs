use std::collections::BTreeMap;
use std::fmt;

/// Presentation property map (`attrs` or `style`), keyed by property name.
///
/// Ordered so that draw calls and traces are deterministic.
pub type PropMap = BTreeMap<String, PropValue>;

/// A single presentation property value.
///
/// Decks carry attributes such as `x: 10` or `font-size: "48px"`; both shapes are accepted and
/// kept as written. Key validity is checked by renderers, not here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Numeric value.
    Number(f64),
    /// Any other value, kept verbatim.
    Text(String),
}

impl PropValue {
    /// Numeric view of this value.
    ///
    /// Text values yield their leading number, so `"48px"` reads as `48.0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => leading_number(s),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Linear interpolation between two values at progress `t` in `[0, 1]`.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for PropValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(<f64 as Lerp>::lerp(x, y, t)),
            (Self::Text(x), Self::Text(y)) => {
                if let (Some(cx), Some(cy)) = (Rgb::parse(x), Rgb::parse(y)) {
                    return Self::Text(Rgb::lerp(&cx, &cy, t).to_hex());
                }
                if let Some(s) = lerp_embedded(x, y, t) {
                    return Self::Text(s);
                }
                snap(a, b, t)
            }
            (Self::Number(x), Self::Text(y)) => match y.trim().parse::<f64>() {
                Ok(y) => Self::Number(<f64 as Lerp>::lerp(x, &y, t)),
                Err(_) => snap(a, b, t),
            },
            (Self::Text(x), Self::Number(y)) => match x.trim().parse::<f64>() {
                Ok(x) => Self::Number(<f64 as Lerp>::lerp(&x, y, t)),
                Err(_) => snap(a, b, t),
            },
        }
    }
}

fn snap(a: &PropValue, b: &PropValue, t: f64) -> PropValue {
    if t >= 1.0 { b.clone() } else { a.clone() }
}

/// Format a number for attribute output: integral values drop the fraction, others keep at most
/// four decimals.
pub(crate) fn format_number(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let ch = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self {
                    r: ch(0)?,
                    g: ch(1)?,
                    b: ch(2)?,
                })
            }
            6 => {
                let ch = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self {
                    r: ch(0)?,
                    g: ch(2)?,
                    b: ch(4)?,
                })
            }
            _ => None,
        }
    }

    fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Piece<'a> {
    Lit(&'a str),
    Num(f64),
}

/// Split `s` into literal runs and decimal numbers (`-12`, `3.5`).
fn pieces(s: &str) -> Vec<Piece<'_>> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let mut j = i;
        if bytes[j] == b'-' {
            j += 1;
        }
        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == digits_start {
            i += 1;
            continue;
        }
        if j + 1 < bytes.len() && bytes[j] == b'.' && bytes[j + 1].is_ascii_digit() {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
        }
        if lit_start < start {
            out.push(Piece::Lit(&s[lit_start..start]));
        }
        match s[start..j].parse::<f64>() {
            Ok(v) => out.push(Piece::Num(v)),
            Err(_) => out.push(Piece::Lit(&s[start..j])),
        }
        lit_start = j;
        i = j;
    }
    if lit_start < bytes.len() {
        out.push(Piece::Lit(&s[lit_start..]));
    }
    out
}

fn leading_number(s: &str) -> Option<f64> {
    match pieces(s.trim()).first() {
        Some(Piece::Num(v)) => Some(*v),
        _ => None,
    }
}

/// Interpolate the numbers embedded in two strings sharing the same literal skeleton, e.g.
/// `"10px"` to `"50px"` or `"translate(0,0)"` to `"translate(40,20)"`.
fn lerp_embedded(a: &str, b: &str, t: f64) -> Option<String> {
    let pa = pieces(a);
    let pb = pieces(b);
    if pa.len() != pb.len() {
        return None;
    }

    let mut out = String::with_capacity(b.len());
    let mut any_number = false;
    for (x, y) in pa.iter().zip(&pb) {
        match (x, y) {
            (Piece::Lit(x), Piece::Lit(y)) if x == y => out.push_str(x),
            (Piece::Num(x), Piece::Num(y)) => {
                any_number = true;
                out.push_str(&format_number(<f64 as Lerp>::lerp(x, y, t)));
            }
            _ => return None,
        }
    }
    any_number.then_some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/value.rs"]
mod tests;
