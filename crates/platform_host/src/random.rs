//! Host random source.

/// Returns a uniformly distributed value in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        rand::random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_unit_stays_in_half_open_range() {
        for _ in 0..256 {
            let value = random_unit();
            assert!((0.0..1.0).contains(&value), "{value} out of range");
        }
    }
}
