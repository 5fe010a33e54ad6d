//! Zero values for primitives and strings.

use crate::MockData;

macro_rules! impl_mock_data {
    ($($ty:ty => $value:expr),* $(,)?) => {
        $(
            impl MockData for $ty {
                fn mock_data() -> Self {
                    $value
                }
            }
        )*
    };
}

impl_mock_data! {
    () => (),
    bool => false,
    char => '\0',
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
    String => String::new(),
    &'static str => "",
}

macro_rules! impl_mock_data_tuple {
    ($($name:ident),+) => {
        impl<$($name: MockData),+> MockData for ($($name,)+) {
            fn mock_data() -> Self {
                ($($name::mock_data(),)+)
            }
        }
    };
}

impl_mock_data_tuple!(A);
impl_mock_data_tuple!(A, B);
impl_mock_data_tuple!(A, B, C);
impl_mock_data_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    //! Unit tests for scalar defaults.

    use crate::MockData;
    use rstest::rstest;

    #[rstest]
    fn scalars_are_zero() {
        assert!(!bool::mock_data());
        assert_eq!(i32::mock_data(), 0);
        assert_eq!(u128::mock_data(), 0);
        assert_eq!(usize::mock_data(), 0);
        assert!(f64::mock_data().abs() < f64::EPSILON);
        assert_eq!(char::mock_data(), '\0');
    }

    #[rstest]
    fn strings_are_empty() {
        assert!(String::mock_data().is_empty());
        assert!(<&str>::mock_data().is_empty());
    }

    #[rstest]
    fn tuples_combine_their_elements() {
        let (flag, count, name) = <(bool, u8, String)>::mock_data();
        assert!(!flag);
        assert_eq!(count, 0);
        assert!(name.is_empty());
    }
}
