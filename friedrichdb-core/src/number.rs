//! Number payload with exact storage for signed, unsigned and floating point values.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};

/// Internal representation of a number.
#[derive(Copy, Clone)]
enum Repr {
    /// Signed 64-bit integer
    I64(i64),
    /// Unsigned 64-bit integer that does not fit in `i64`
    U64(u64),
    /// Finite 64-bit floating point
    F64(f64),
}

/// A numeric field payload.
///
/// Integers are stored exactly; unsigned values only use the unsigned representation
/// when they exceed `i64::MAX`. Floats must be finite, which keeps numbers totally
/// ordered.
#[derive(Copy, Clone)]
pub struct FNumber(Repr);

impl FNumber {
    /// Creates a number from an i64.
    #[must_use]
    pub const fn from_i64(v: i64) -> Self {
        FNumber(Repr::I64(v))
    }

    /// Creates a number from a u64.
    #[must_use]
    pub const fn from_u64(v: u64) -> Self {
        if v <= i64::MAX as u64 {
            FNumber(Repr::I64(v as i64))
        } else {
            FNumber(Repr::U64(v))
        }
    }

    /// Creates a number from an f64.
    ///
    /// Returns `None` if the value is NaN or infinite.
    #[must_use]
    pub fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then_some(FNumber(Repr::F64(v)))
    }

    /// Returns the number zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_i64(0)
    }

    /// Converts to i64 if it can be represented exactly.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::I64(i) => Some(i),
            Repr::U64(u) => i64::try_from(u).ok(),
            Repr::F64(f) => {
                if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    let i = f as i64;
                    if i as f64 == f {
                        return Some(i);
                    }
                }
                None
            }
        }
    }

    /// Converts to u64 if it can be represented exactly.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.0 {
            Repr::I64(i) => u64::try_from(i).ok(),
            Repr::U64(u) => Some(u),
            Repr::F64(f) => {
                if f >= 0.0 && f <= u64::MAX as f64 {
                    let u = f as u64;
                    if u as f64 == f {
                        return Some(u);
                    }
                }
                None
            }
        }
    }

    /// Converts to f64 if it can be represented exactly.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self.0 {
            Repr::I64(i) => {
                let f = i as f64;
                if f as i64 == i { Some(f) } else { None }
            }
            Repr::U64(u) => {
                let f = u as f64;
                if f as u64 == u { Some(f) } else { None }
            }
            Repr::F64(f) => Some(f),
        }
    }

    /// Converts to f64, potentially losing precision.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self.0 {
            Repr::I64(i) => i as f64,
            Repr::U64(u) => u as f64,
            Repr::F64(f) => f,
        }
    }

    /// Returns true if this number was created from a floating point value.
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self.0, Repr::F64(_))
    }

    /// Returns true if this number is an integer (signed or unsigned).
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.0, Repr::I64(_) | Repr::U64(_))
    }
}

impl PartialEq for FNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FNumber {}

impl PartialOrd for FNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::F64(a), Repr::F64(b)) => {
                // Finite floats only, so total_cmp agrees with numeric order except
                // for the sign of zero.
                if a == b { Ordering::Equal } else { a.total_cmp(&b) }
            }
            (Repr::F64(a), _) => cmp_int_float(other.as_i128(), a).reverse(),
            (_, Repr::F64(b)) => cmp_int_float(self.as_i128(), b),
            _ => self.as_i128().cmp(&other.as_i128()),
        }
    }
}

/// Lower bound of the integer range, `-2^63`.
const INT_MIN: f64 = -9_223_372_036_854_775_808.0;
/// One past the upper bound of the integer range, `2^64`.
const INT_END: f64 = 18_446_744_073_709_551_616.0;

impl FNumber {
    /// Integer value of an `I64`/`U64` number. Meaningless for floats.
    fn as_i128(&self) -> i128 {
        match self.0 {
            Repr::I64(i) => i128::from(i),
            Repr::U64(u) => i128::from(u),
            Repr::F64(f) => f as i128,
        }
    }

    /// The exact integer this number equals, if any.
    fn integral(&self) -> Option<i128> {
        match self.0 {
            Repr::F64(f) if f.fract() != 0.0 || !(INT_MIN..INT_END).contains(&f) => None,
            Repr::F64(f) => Some(f as i128),
            _ => Some(self.as_i128()),
        }
    }
}

/// Orders an integer against a finite float without rounding either.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    if f < INT_MIN {
        return Ordering::Greater;
    }
    if f >= INT_END {
        return Ordering::Less;
    }
    let whole = f.trunc();
    // |whole| < 2^64, so the cast is exact.
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ord => ord,
    }
}

impl Hash for FNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal numbers must hash alike whatever their representation.
        match self.integral() {
            Some(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            None => {
                1u8.hash(state);
                self.to_f64_lossy().to_bits().hash(state);
            }
        }
    }
}

impl Debug for FNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::I64(i) => Debug::fmt(&i, f),
            Repr::U64(u) => Debug::fmt(&u, f),
            Repr::F64(fl) => Debug::fmt(&fl, f),
        }
    }
}

impl Display for FNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::I64(i) => Display::fmt(&i, f),
            Repr::U64(u) => Display::fmt(&u, f),
            // Keep a fractional part so the text reads back as a float.
            Repr::F64(fl) if fl.fract() == 0.0 && fl.abs() < 1e16 => write!(f, "{fl:.1}"),
            Repr::F64(fl) => Display::fmt(&fl, f),
        }
    }
}

impl Default for FNumber {
    fn default() -> Self {
        Self::zero()
    }
}

// === From implementations ===

macro_rules! impl_from_int {
    ($($t:ty => $method:ident),* $(,)?) => {
        $(
            impl From<$t> for FNumber {
                fn from(v: $t) -> Self {
                    Self::$method(v as _)
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => from_i64,
    i16 => from_i64,
    i32 => from_i64,
    i64 => from_i64,
    isize => from_i64,
    u8 => from_i64,
    u16 => from_i64,
    u32 => from_i64,
    u64 => from_u64,
    usize => from_u64,
}

impl TryFrom<f32> for FNumber {
    type Error = ();

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(v)).ok_or(())
    }
}

impl TryFrom<f64> for FNumber {
    type Error = ();

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::from_f64(v).ok_or(())
    }
}
