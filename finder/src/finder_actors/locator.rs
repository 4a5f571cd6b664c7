use crate::messages::AcquirePosition;
use actix::prelude::*;
use colored::Color;
use common::error::FinderError;
use common::logger::Logger;
use common::types::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Balanced,
    High,
}

/// Where the device position comes from.
pub trait PositionSource {
    fn request_permission(&mut self) -> PermissionStatus;
    fn current_position(&mut self, accuracy: Accuracy) -> Result<Position, FinderError>;
}

/// A source that reports a position given up front, or denies permission
/// when there is none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguredPosition {
    pub position: Option<Position>,
}

impl ConfiguredPosition {
    pub fn new(position: Option<Position>) -> Self {
        Self { position }
    }
}

impl PositionSource for ConfiguredPosition {
    fn request_permission(&mut self) -> PermissionStatus {
        if self.position.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn current_position(&mut self, _accuracy: Accuracy) -> Result<Position, FinderError> {
        self.position.ok_or(FinderError::PermissionDenied)
    }
}

/// The `Locator` actor acquires the user's position on demand.
///
/// A denied permission or a failed acquisition is logged and answered with
/// `None`; the rest of the pipeline keeps going without a position.
pub struct Locator {
    source: Box<dyn PositionSource>,
    logger: Logger,
}

impl Locator {
    pub fn new(source: Box<dyn PositionSource>) -> Self {
        Self {
            source,
            logger: Logger::new("Locator", Color::Cyan),
        }
    }

    fn acquire(&mut self) -> Result<Position, FinderError> {
        if self.source.request_permission() == PermissionStatus::Denied {
            return Err(FinderError::PermissionDenied);
        }
        self.source.current_position(Accuracy::High)
    }
}

impl Actor for Locator {
    type Context = Context<Self>;
}

impl Handler<AcquirePosition> for Locator {
    type Result = MessageResult<AcquirePosition>;

    fn handle(&mut self, _msg: AcquirePosition, _ctx: &mut Self::Context) -> Self::Result {
        let position = match self.acquire() {
            Ok(position) => {
                self.logger.info(format!("Current position: {}", position));
                Some(position)
            }
            Err(FinderError::PermissionDenied) => {
                self.logger
                    .warn("Please allow GPS access. Distances will show as 0.00 km.");
                None
            }
            Err(e) => {
                self.logger.error(format!("Could not acquire position: {}", e));
                None
            }
        };
        MessageResult(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenGps;

    impl PositionSource for BrokenGps {
        fn request_permission(&mut self) -> PermissionStatus {
            PermissionStatus::Granted
        }

        fn current_position(&mut self, _accuracy: Accuracy) -> Result<Position, FinderError> {
            Err(FinderError::PositionUnavailable("no fix".to_string()))
        }
    }

    #[actix_rt::test]
    async fn test_granted_position_is_returned() {
        let position = Position::new(14.0379, 100.6183);
        let locator = Locator::new(Box::new(ConfiguredPosition::new(Some(position)))).start();
        assert_eq!(locator.send(AcquirePosition).await.unwrap(), Some(position));
    }

    #[actix_rt::test]
    async fn test_denied_permission_yields_none() {
        let locator = Locator::new(Box::new(ConfiguredPosition::new(None))).start();
        assert_eq!(locator.send(AcquirePosition).await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn test_acquisition_failure_yields_none() {
        let locator = Locator::new(Box::new(BrokenGps)).start();
        assert_eq!(locator.send(AcquirePosition).await.unwrap(), None);
    }
}
