use derive_more::{Display, From};

/// A stand-in for something trainable: one field, one setter, just enough for a loop to call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, From)]
#[display("Model({data})")]
pub struct Model {
    data: i32,
}

impl Model {
    /// Creates a model that hasn't seen any data yet.
    pub const fn new() -> Model {
        Model { data: 0 }
    }

    /// Stores `val` as the model's entire state of knowledge.
    pub const fn update(&mut self, val: i32) {
        self.data = val;
    }

    /// The last value the model saw.
    pub const fn data(&self) -> i32 {
        self.data
    }
}
