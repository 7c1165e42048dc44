use emd_core::Energy;

/// A raw scalar observation that can be binned.
///
/// Every sample is widened to [`Energy`] before any bin edge is computed,
/// so integer and floating inputs with the same values bin identically.
pub trait Sample: Copy {
    fn value(self) -> Energy;
}

macro_rules! sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn value(self) -> Energy {
                    self as Energy
                }
            }
        )*
    };
}

sample!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Widens a sample collection to floating point.
pub fn values<T: Sample>(samples: &[T]) -> Vec<Energy> {
    samples.iter().copied().map(Sample::value).collect()
}
