use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
};

use crate::MassNumber;

impl MassNumber {
    pub(crate) fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }
}

impl Display for MassNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MassNumber> for u32 {
    fn from(value: MassNumber) -> Self {
        value.0.get()
    }
}
