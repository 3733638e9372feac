/// Options for a single encoder or decoder compilation.
///
/// A fresh value is built for every compilation call and discarded once the
/// call returns; instances are plain `Copy` values and are never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// How many levels of nested struct types the compiler unrolls eagerly.
    /// Anything deeper falls back to the generic recursive path.
    pub recursive_depth: isize,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recursive compile depth.
    ///
    /// The default (0) compiles only the top level eagerly, which is enough
    /// for basic types and small nested structs. Raising it shifts work into
    /// ahead-of-time compilation and cuts the cost of the first encode or
    /// decode of a large, deeply nested type.
    ///
    /// No range check happens here: the consuming compiler bounds the value.
    /// Setters compose left to right, so the last depth written wins.
    pub fn with_recursive_depth(mut self, depth: isize) -> Self {
        self.recursive_depth = depth;
        self
    }
}
