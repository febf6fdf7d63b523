/// A source of uniformly distributed indices used to draw symbol characters.
///
/// This abstraction allows you to plug in a real random source or a scripted
/// one in tests. The generator keeps its source behind a mutex, so `rand_index`
/// takes `&mut self` and implementations need not be `Sync`.
///
/// # Example
/// ```
/// use openfigi::RandSource;
///
/// struct AlwaysFirst;
/// impl RandSource for AlwaysFirst {
///     fn rand_index(&mut self, _len: usize) -> usize {
///         0
///     }
/// }
///
/// let mut rng = AlwaysFirst;
/// assert_eq!(rng.rand_index(31), 0);
/// ```
pub trait RandSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn rand_index(&mut self, len: usize) -> usize;
}
