//! SPI device bindings
//!
//! Both adapters expect a device that already manages chip select: each
//! `write` becomes one CS-framed transaction, which is what latches the
//! shifted words into the chain. Clock mode and CS polarity are set up
//! when the device is created; [`clock_mode`] turns the configured mode
//! into the form SPI peripherals take.

use dotchain_hal::{Phase, Polarity, SpiBus, SpiConfig};

/// `embedded-hal` clock mode for a bus configuration
pub fn clock_mode(config: &SpiConfig) -> embedded_hal::spi::Mode {
    let (polarity, phase): (Polarity, Phase) = config.mode.into();
    embedded_hal::spi::Mode {
        polarity: match polarity {
            Polarity::IdleLow => embedded_hal::spi::Polarity::IdleLow,
            Polarity::IdleHigh => embedded_hal::spi::Polarity::IdleHigh,
        },
        phase: match phase {
            Phase::CaptureOnFirstTransition => embedded_hal::spi::Phase::CaptureOnFirstTransition,
            Phase::CaptureOnSecondTransition => embedded_hal::spi::Phase::CaptureOnSecondTransition,
        },
    }
}

/// Blocking `embedded-hal` SPI device as a matrix transport
pub struct SpiDeviceBus<D> {
    device: D,
}

impl<D> SpiDeviceBus<D>
where
    D: embedded_hal::spi::SpiDevice,
{
    /// Wrap an SPI device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Give the device back
    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D> SpiBus for SpiDeviceBus<D>
where
    D: embedded_hal::spi::SpiDevice,
{
    type Error = D::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.device.write(data)
    }
}

/// Async `embedded-hal-async` SPI device as a matrix transport
///
/// Each write is driven to completion with `embassy_futures::block_on`
/// before returning, so register writes keep their order. `block_on`
/// busy-polls: inside an executor task it holds the executor for the whole
/// transfer and no other task runs until it finishes. A render is eight
/// such transfers. Prefer [`SpiDeviceBus`] over a blocking device when the
/// session lives in an async task, including behind
/// [`SharedSession`](crate::SharedSession).
pub struct AsyncSpiDeviceBus<D> {
    device: D,
}

impl<D> AsyncSpiDeviceBus<D>
where
    D: embedded_hal_async::spi::SpiDevice,
{
    /// Wrap an async SPI device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Give the device back
    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D> SpiBus for AsyncSpiDeviceBus<D>
where
    D: embedded_hal_async::spi::SpiDevice,
{
    type Error = D::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embassy_futures::block_on(self.device.write(data))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dotchain_core::{ControllerSession, MatrixConfig, MatrixError};
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation};

    /// Records the bytes of every transaction
    #[derive(Default)]
    pub(crate) struct MockDevice {
        pub transactions: Vec<Vec<u8>>,
        pub fail: bool,
    }

    impl ErrorType for MockDevice {
        type Error = ErrorKind;
    }

    impl MockDevice {
        fn record(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(buf) = op {
                    bytes.extend_from_slice(buf);
                }
            }
            self.transactions.push(bytes);
            Ok(())
        }
    }

    impl embedded_hal::spi::SpiDevice for MockDevice {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), ErrorKind> {
            self.record(operations)
        }
    }

    impl embedded_hal_async::spi::SpiDevice for MockDevice {
        async fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), ErrorKind> {
            self.record(operations)
        }
    }

    fn config(chain_length: u8) -> MatrixConfig {
        MatrixConfig {
            chain_length,
            ..Default::default()
        }
    }

    #[test]
    fn test_blocking_write_is_one_transaction() {
        let mut bus = SpiDeviceBus::new(MockDevice::default());
        bus.write(&[0x0C, 0x01, 0x0C, 0x01]).unwrap();

        let device = bus.into_inner();
        assert_eq!(device.transactions, [[0x0C, 0x01, 0x0C, 0x01]]);
    }

    #[test]
    fn test_async_write_is_one_transaction() {
        let mut bus = AsyncSpiDeviceBus::new(MockDevice::default());
        bus.write(&[0x0A, 0x07]).unwrap();

        let device = bus.into_inner();
        assert_eq!(device.transactions, [[0x0A, 0x07]]);
    }

    #[test]
    fn test_clock_mode_from_config() {
        use dotchain_core::parse_config;
        use embedded_hal::spi::{MODE_0, MODE_1, MODE_2, MODE_3};

        assert_eq!(clock_mode(&SpiConfig::default()), MODE_0);
        for (index, expected) in [(1, MODE_1), (2, MODE_2), (3, MODE_3)] {
            let input = format!("[bus]\nmode = {index}");
            let config = parse_config(&input).unwrap();
            assert_eq!(clock_mode(&config.bus), expected);
        }
    }

    #[test]
    fn test_device_error_is_transport_error() {
        let device = MockDevice {
            fail: true,
            ..Default::default()
        };
        match ControllerSession::open(SpiDeviceBus::new(device), &config(1)) {
            Ok(_) => panic!("failing device accepted"),
            Err(e) => {
                assert_eq!(e.error, MatrixError::Transport(ErrorKind::Other));
                assert!(e.bus.into_inner().transactions.is_empty());
            }
        }
    }

    fn open_and_render<B>(bus: B) -> B
    where
        B: SpiBus,
        B::Error: core::fmt::Debug,
    {
        match ControllerSession::open(bus, &config(2)) {
            Ok(mut session) => {
                session.render_text("Hi").unwrap();
                session.release()
            }
            Err(e) => panic!("open failed: {:?}", e.error),
        }
    }

    #[test]
    fn test_both_bindings_send_identical_traffic() {
        let blocking = open_and_render(SpiDeviceBus::new(MockDevice::default())).into_inner();
        let async_bound = open_and_render(AsyncSpiDeviceBus::new(MockDevice::default())).into_inner();

        assert_eq!(blocking.transactions.len(), 5 + 8);
        assert_eq!(blocking.transactions, async_bound.transactions);
    }
}
