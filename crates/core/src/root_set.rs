/// An insertion-ordered collection of roots found across solver runs.
///
/// No uniqueness or sorting is enforced. Roots are labelled by position:
/// `A`, `B`, … `Z`, then `R27`, `R28`, and so on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet {
    roots: Vec<f64>,
}

impl RootSet {
    /// Creates an empty root set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a root.
    pub fn push(&mut self, x: f64) {
        self.roots.push(x);
    }

    /// Returns the number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if no roots have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the roots in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.roots
    }

    /// Returns the label for the root at `index`.
    #[must_use]
    pub fn label(index: usize) -> String {
        match u8::try_from(index) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => format!("R{}", index + 1),
        }
    }

    /// Iterates over `(label, root)` pairs in insertion order.
    pub fn labeled(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.roots
            .iter()
            .enumerate()
            .map(|(i, &x)| (Self::label(i), x))
    }
}

impl Extend<f64> for RootSet {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.roots.extend(iter);
    }
}

impl FromIterator<f64> for RootSet {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}
