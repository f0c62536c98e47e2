//! Presentation capability. The engine resolves every row to display
//! strings before handing them over, so a presenter needs no access to
//! live `Player` records and the core never depends on how rows are drawn.

use crate::error::Result;
use crate::pairing::PairingRow;

/// Consumes the finalized row sequence, once per pairing generation, in
/// the exact order the engine produced it.
pub trait Presenter {
    fn present(&mut self, rows: &[PairingRow]) -> Result<()>;
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Presenter;
    use crate::error::Result;
    use crate::pairing::PairingRow;

    /// Records every batch it receives, for asserting the hand-off contract.
    #[derive(Default)]
    pub struct RecordingPresenter {
        pub batches: Vec<Vec<PairingRow>>,
    }

    impl RecordingPresenter {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, rows: &[PairingRow]) -> Result<()> {
            self.batches.push(rows.to_vec());
            Ok(())
        }
    }
}
