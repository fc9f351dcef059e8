// Fakes en memoria para tests sin navegador

use std::cell::Cell;
use crate::error::AppError;
use super::{ControlInput, MarkerView};

#[derive(Default)]
pub struct FakeMarker {
    pub highlighted: Cell<bool>,
    pub applied: Cell<usize>,
    pub fail: Cell<bool>,
}

impl MarkerView for FakeMarker {
    fn apply_highlight(&self, highlighted: bool) -> Result<(), AppError> {
        if self.fail.get() {
            return Err(AppError::Js("content missing".to_string()));
        }
        self.highlighted.set(highlighted);
        self.applied.set(self.applied.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeInput {
    pub current: Cell<bool>,
    pub writes: Cell<usize>,
}

impl FakeInput {
    pub fn value(&self) -> bool {
        self.current.get()
    }
}

impl ControlInput for FakeInput {
    fn set_value(&self, value: bool) {
        self.current.set(value);
        self.writes.set(self.writes.get() + 1);
    }
}
