//! BMA423 step counter over I2C
//!
//! Minimal driver: probe, enable the accelerometer and step counter,
//! read the hardware step count. The count is cumulative from enable;
//! the steps task turns it into a since-midnight figure.

use embedded_hal::i2c::I2c;

/// Default I2C address (SDO low)
pub const I2C_ADDR: u8 = 0x18;

const REG_CHIP_ID: u8 = 0x00;
const REG_STEP_COUNT_0: u8 = 0x1E;
const REG_PWR_CTRL: u8 = 0x7D;

const CHIP_ID: u8 = 0x13;
const PWR_ACC_ENABLE: u8 = 0x04;

/// Errors from the step counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// I2C bus error
    Bus(E),
    /// Chip ID register did not match a BMA423
    UnknownChip(u8),
}

pub struct Bma423<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Bma423<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Probe the chip and enable the accelerometer and step counter
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(I2C_ADDR, &[REG_CHIP_ID], &mut id)
            .map_err(Error::Bus)?;
        if id[0] != CHIP_ID {
            return Err(Error::UnknownChip(id[0]));
        }

        self.i2c
            .write(I2C_ADDR, &[REG_PWR_CTRL, PWR_ACC_ENABLE])
            .map_err(Error::Bus)?;
        Ok(())
    }

    /// Hardware step count since the counter was enabled
    pub fn step_count(&mut self) -> Result<u32, Error<I2C::Error>> {
        let mut raw = [0u8; 4];
        self.i2c
            .write_read(I2C_ADDR, &[REG_STEP_COUNT_0], &mut raw)
            .map_err(Error::Bus)?;
        Ok(u32::from_le_bytes(raw))
    }
}
