//! Recording board for driver tests

use lumen_hal::{Board, CommandBus};

/// One board-level operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusOp {
    Command(u8),
    Data(Vec<u8>),
    Reset(bool),
    Sleep(u32),
    Backlight(u8),
    InitBoard,
}

/// Injected bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Board that records every operation
#[derive(Debug, Default)]
pub struct MockBoard {
    pub ops: Vec<BusOp>,
    /// Fail data writes after this many have succeeded
    pub fail_data_after: Option<usize>,
    /// Reject every backlight change
    pub fail_backlight: bool,
    data_writes: usize,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `command` was issued
    pub fn commands_issued(&self, command: u8) -> usize {
        self.ops
            .iter()
            .filter(|op| **op == BusOp::Command(command))
            .count()
    }

    /// Pixel counts of the data transfers from `start` on
    pub fn transfer_sizes_after(&self, start: usize) -> Vec<usize> {
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                BusOp::Data(bytes) => Some(bytes.len() / 2),
                _ => None,
            })
            .collect()
    }

    /// Number of data transfers recorded
    pub fn data_transfers(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, BusOp::Data(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl CommandBus for MockBoard {
    type Error = MockError;

    fn write_command(&mut self, command: u8) -> Result<(), MockError> {
        self.ops.push(BusOp::Command(command));
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), MockError> {
        if self.fail_data_after.is_some_and(|limit| self.data_writes >= limit) {
            return Err(MockError);
        }
        self.data_writes += 1;
        self.ops.push(BusOp::Data(data.to_vec()));
        Ok(())
    }
}

impl Board for MockBoard {
    fn init_board(&mut self) -> Result<(), MockError> {
        self.ops.push(BusOp::InitBoard);
        Ok(())
    }

    fn set_reset_pin(&mut self, active: bool) -> Result<(), MockError> {
        self.ops.push(BusOp::Reset(active));
        Ok(())
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.ops.push(BusOp::Sleep(ms));
    }

    fn set_backlight(&mut self, percent: u8) -> Result<u8, MockError> {
        if self.fail_backlight {
            return Err(MockError);
        }
        self.ops.push(BusOp::Backlight(percent));
        Ok(percent)
    }
}
