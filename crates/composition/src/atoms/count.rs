use std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    num::NonZeroU32,
};

use crate::Count;

impl Count {
    pub(crate) fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }
}

impl From<Count> for u32 {
    fn from(value: Count) -> Self {
        value.0.get()
    }
}

// NOTE: Saturates instead of overflowing, since any single count can already be as large as `u32::MAX`
impl Sum<Count> for u32 {
    fn sum<I: Iterator<Item = Count>>(iter: I) -> Self {
        iter.map(Self::from).fold(0, Self::saturating_add)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let count = self.0.get();
        if count > 1 {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_display() {
        assert_eq!(Count::default().to_string(), "");
        assert_eq!(Count::new(1).unwrap().to_string(), "");
        assert_eq!(Count::new(2).unwrap().to_string(), "2");
        assert_eq!(Count::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn count_sum() {
        let counts = [1, 2, 4].map(|n| Count::new(n).unwrap());
        assert_eq!(counts.into_iter().sum::<u32>(), 7);
        assert_eq!(Count::new(0), None);
    }

    #[test]
    fn count_sum_saturates() {
        let counts = [u32::MAX, 1, 7].map(|n| Count::new(n).unwrap());
        assert_eq!(counts.into_iter().sum::<u32>(), u32::MAX);
        let counts = [u32::MAX - 1, 1].map(|n| Count::new(n).unwrap());
        assert_eq!(counts.into_iter().sum::<u32>(), u32::MAX);
    }
}
