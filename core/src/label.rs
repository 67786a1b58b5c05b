use std::hash::Hash;

/// Identifier stored in a vertex and used as a key in [`ChainingMap`](crate::ChainingMap).
///
/// `is_null` marks the empty sentinel that every graph and map operation
/// rejects. `tie_break_key` is the string form compared when two frontier
/// paths have the same distance.
pub trait Label: Hash + Eq + Clone {
    fn is_null(&self) -> bool {
        false
    }

    fn tie_break_key(&self) -> String;
}

impl Label for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }

    fn tie_break_key(&self) -> String {
        self.clone()
    }
}

impl Label for &str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }

    fn tie_break_key(&self) -> String {
        (*self).to_string()
    }
}

impl<L: Label> Label for Option<L> {
    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(Label::is_null)
    }

    fn tie_break_key(&self) -> String {
        match self {
            Some(label) => label.tie_break_key(),
            None => "null".to_string(),
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Label for $ty {
                fn tie_break_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_label!(char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
