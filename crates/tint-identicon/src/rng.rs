// SPDX-License-Identifier: MIT

//! The identicon random stream: a four-word xorshift generator.
//!
//! The recurrence works on the seed words reinterpreted as signed 32-bit
//! integers, so both right shifts are arithmetic:
//!
//! ```text
//! t  = s0 ^ (s0 << 11)
//! s0, s1, s2 = s1, s2, s3
//! s3 = s3 ^ (s3 >> 19) ^ t ^ (t >> 8)
//! ```
//!
//! An arithmetic shift copies the sign bit, so `s3 ^ (s3 >> 19)` and
//! `t ^ (t >> 8)` each have a clear sign bit and so does the new `s3`.
//! Every draw is therefore in [0, 1].
//!
//! There is no global generator. Each identicon owns its stream for the
//! duration of one generation; nothing here touches a non-deterministic
//! source.

use crate::seed::Seed;

/// Deterministic xorshift stream over a [`Seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128 {
    state: [i32; 4],
}

impl Xorshift128 {
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn new(seed: Seed) -> Self {
        let [a, b, c, d] = seed.0;
        // Bit-for-bit reinterpretation, not a numeric conversion.
        Self {
            state: [a as i32, b as i32, c as i32, d as i32],
        }
    }

    /// Advance the stream and return the new last word.
    #[allow(clippy::cast_sign_loss)]
    pub const fn next_u32(&mut self) -> u32 {
        let [s0, s1, s2, s3] = self.state;
        let t = s0 ^ (s0 << 11);
        let next = s3 ^ (s3 >> 19) ^ t ^ (t >> 8);
        self.state = [s1, s2, s3, next];
        next as u32
    }

    /// Advance the stream and return a value in [0, 1].
    pub fn draw(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(i32::MAX)
    }

    /// The current state, as unsigned seed words.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn state(&self) -> Seed {
        let [a, b, c, d] = self.state;
        Seed([a as u32, b as u32, c as u32, d as u32])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_seed_is_a_fixed_point() {
        let mut rng = Xorshift128::new(Seed::ZERO);
        for _ in 0..16 {
            assert_eq!(rng.next_u32(), 0);
        }
        assert_eq!(Xorshift128::new(Seed::ZERO).draw(), 0.0);
    }

    #[test]
    fn hello_fixture() {
        let mut rng = Xorshift128::new(Seed::from_bytes(b"hello"));
        assert_eq!(rng.next_u32(), 6_839_646);
        assert_eq!(rng.state(), Seed([101, 108, 108, 6_839_646]));

        let mut rng = Xorshift128::new(Seed::from_bytes(b"hello"));
        let draws: Vec<f64> = (0..8).map(|_| rng.draw()).collect();
        let expected = [
            0.003_184_958_362_572_341_4,
            0.003_279_461_526_907_729_7,
            0.003_176_345_957_059_574_5,
            0.003_279_461_526_907_729_7,
            0.520_854_220_036_815,
            0.196_626_207_417_168_74,
            0.700_535_175_716_753_6,
            0.016_951_124_657_388_367,
        ];
        for (got, want) in draws.iter().zip(expected) {
            assert!((got - want).abs() < 1e-15, "got {got}, want {want}");
        }
    }

    #[test]
    fn negative_words_shift_arithmetically() {
        // s3 with the sign bit set: an unsigned shift would differ here.
        let mut signed = Xorshift128::new(Seed([0, 0, 0, 0x8000_0000]));
        let next = signed.next_u32();
        // 0x80000000 ^ (0x80000000 >> 19, arithmetic) = 0x80000000 ^ 0xFFFFF000
        assert_eq!(next, 0x7fff_f000);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = Xorshift128::new(Seed::from_bytes(b"The quick brown fox"));
        for _ in 0..10_000 {
            let d = rng.draw();
            assert!((0.0..=1.0).contains(&d), "draw {d} out of range");
        }
    }

    #[test]
    fn streams_are_independent() {
        let seed = Seed::from_bytes(b"independent");
        let mut a = Xorshift128::new(seed);
        let mut b = a.clone();
        let first: Vec<u32> = (0..5).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..5).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);
    }
}
