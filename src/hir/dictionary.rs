use indexmap::IndexMap;

use crate::syntax::TypeDeclaration;

/// Per-project map from qualified type name to its declaration.
///
/// Keys are case-sensitive. When two namespaces declare the same key the
/// last declaration inserted wins.
#[derive(Clone, Debug, Default)]
pub struct TypeDictionary {
    types: IndexMap<String, TypeDeclaration>,
}

impl TypeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the declaration's qualified name, returning any replaced entry.
    pub fn insert(&mut self, declaration: TypeDeclaration) -> Option<TypeDeclaration> {
        let key = declaration.qualified_name();
        let replaced = self.types.insert(key, declaration);
        if let Some(old) = &replaced {
            tracing::debug!("Type {} redeclared, keeping the last one", old.qualified_name());
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDeclaration)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Extend<TypeDeclaration> for TypeDictionary {
    fn extend<I: IntoIterator<Item = TypeDeclaration>>(&mut self, iter: I) {
        for declaration in iter {
            self.insert(declaration);
        }
    }
}

impl FromIterator<TypeDeclaration> for TypeDictionary {
    fn from_iter<I: IntoIterator<Item = TypeDeclaration>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}
