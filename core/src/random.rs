/// Source of the bytes behind `CXNN`
pub trait RandomSource {
    fn random_byte(&mut self) -> u8;
}

/// Random bytes from the thread-local generator
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_byte(&mut self) -> u8 {
        rand::random()
    }
}

/// Always yields the same byte; makes `CXNN` reproducible
#[derive(Copy, Clone, Debug)]
pub struct FixedRandom(pub u8);

impl RandomSource for FixedRandom {
    fn random_byte(&mut self) -> u8 {
        self.0
    }
}
