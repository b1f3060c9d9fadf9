macro_rules! nalgebra_position {
    ($point:ident, $vector:ident) => {
        impl<T: Real> Position for nalgebra::$point<T> {
            type Scalar = T;

            #[inline]
            fn origin() -> Self {
                nalgebra::$point::from(nalgebra::$vector::zeros())
            }

            #[inline]
            fn blend(&self, other: &Self, omega: T) -> Self {
                nalgebra::$point::from(
                    self.coords * (T::one() - omega) + other.coords * omega,
                )
            }

            #[inline]
            fn scale(&self, factor: T) -> Self {
                nalgebra::$point::from(self.coords * factor)
            }

            #[inline]
            fn accumulate(&self, other: &Self) -> Self {
                nalgebra::$point::from(self.coords + other.coords)
            }

            #[inline]
            fn distance(&self, other: &Self) -> T {
                (other.coords - self.coords).norm()
            }

            #[inline]
            fn offset_xy(&self, dx: T, dy: T) -> Self {
                let mut moved = *self;
                moved.x += dx;
                moved.y += dy;
                moved
            }
        }
    };
}
