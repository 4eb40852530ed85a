//! Children descriptions

use weft_dom::NodeId;

/// What a node should contain, before flattening.
///
/// `Empty` and `Bool` contribute nothing, which lets callers write
/// conditional children without branching.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Child {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    Node(NodeId),
    List(Vec<Child>),
}

impl Child {
    /// Whether flattening this produces no nodes at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty | Self::Bool(_) => true,
            Self::List(items) => items.iter().all(Child::is_empty),
            _ => false,
        }
    }
}

impl From<()> for Child {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<bool> for Child {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Child {
            fn from(value: $ty) -> Self {
                Self::Number(value as f64)
            }
        })*
    };
}

number_from!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NodeId> for Child {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>> FromIterator<T> for Child {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Child::from(()), Child::Empty);
        assert_eq!(Child::from(-42), Child::Number(-42.0));
        assert_eq!(Child::from("foo"), Child::Text("foo".into()));
        assert_eq!(Child::from(None::<i32>), Child::Empty);
        assert_eq!(
            Child::from(vec![1, 2]),
            Child::List(vec![Child::Number(1.0), Child::Number(2.0)])
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Child::Empty.is_empty());
        assert!(Child::Bool(true).is_empty());
        assert!(Child::List(vec![Child::Bool(false), Child::List(vec![])]).is_empty());
        assert!(!Child::Text(String::new()).is_empty());
        assert!(!Child::List(vec![Child::Number(0.0)]).is_empty());
    }
}
