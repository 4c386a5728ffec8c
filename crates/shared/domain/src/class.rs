//! Type-erased handle to a cosmology class.
//! Mappings store class references without knowing the concrete class type,
//! which lives in the kernel crate.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A class that can be referenced from a mapping's `cosmology` entry.
pub trait ClassObject: Any + fmt::Debug + Send + Sync {
    /// Qualified name under which the class is registered.
    fn qualname(&self) -> &str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Shared-ownership counterpart of [`ClassObject::as_any`].
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// Shared reference to a class object.
///
/// Two references are equal when they name the same class.
#[derive(Clone)]
pub struct ClassRef(Arc<dyn ClassObject>);

impl ClassRef {
    pub fn new<T: ClassObject>(class: Arc<T>) -> Self {
        Self(class)
    }

    #[must_use]
    pub fn qualname(&self) -> &str {
        self.0.qualname()
    }

    /// Returns the concrete class if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: ClassObject>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Returns a shared handle to the concrete class if it is a `T`.
    #[must_use]
    pub fn downcast<T: ClassObject>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.0).into_any().downcast::<T>().ok()
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.qualname() == other.qualname()
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.qualname())
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualname())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Toy(&'static str);

    impl ClassObject for Toy {
        fn qualname(&self) -> &str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    #[derive(Debug)]
    struct Other;

    impl ClassObject for Other {
        fn qualname(&self) -> &str {
            "Other"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    #[test]
    fn downcast_recovers_the_shared_class() {
        let toy = Arc::new(Toy("Toy"));
        let class = ClassRef::new(Arc::clone(&toy));
        assert!(Arc::ptr_eq(&class.downcast::<Toy>().unwrap(), &toy));
        assert!(class.downcast::<Other>().is_none());
        assert_eq!(class.downcast_ref::<Toy>().map(|t| t.0), Some("Toy"));
    }

    #[test]
    fn references_compare_by_name() {
        let a = ClassRef::new(Arc::new(Toy("Toy")));
        let b = ClassRef::new(Arc::new(Toy("Toy")));
        assert_eq!(a, b);
        assert_ne!(a, ClassRef::new(Arc::new(Other)));
        assert_eq!(format!("{a:?}"), "<class 'Toy'>");
    }
}
