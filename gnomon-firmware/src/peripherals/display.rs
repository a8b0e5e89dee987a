//! GC9A01 panel bring-up
//!
//! 240x240 round panel on SPI, driven through mipidsi. Called once from
//! main; there is no watchface without a panel, so init failures panic.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::GC9A01;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::{Builder, Display};
use static_cell::StaticCell;

/// Command staging buffer for the display interface
static DI_BUF: StaticCell<[u8; 512]> = StaticCell::new();

pub type WatchDisplay = Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, Delay>,
        Output<'static>,
    >,
    GC9A01,
    Output<'static>,
>;

/// Initialize the panel and switch the backlight on
pub fn init(
    spi: Spi<'static, SPI1, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
    rst: Output<'static>,
    mut backlight: Output<'static>,
) -> WatchDisplay {
    let spi_dev = ExclusiveDevice::new(spi, cs, Delay).unwrap();
    let di = SpiInterface::new(spi_dev, dc, DI_BUF.init([0u8; 512]));

    let display = Builder::new(GC9A01, di)
        .display_size(240, 240)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(rst)
        .init(&mut Delay)
        .unwrap();

    backlight.set_high();
    display
}
