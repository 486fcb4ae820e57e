// ============================================================
// Layer 5 — Loan Classifier Architecture
// ============================================================
// A small feed-forward network over the encoded applicant row:
//
//   features [batch, d_input]
//       │  Linear
//       ▼
//   hidden   [batch, d_hidden]  → ReLU
//       │  Linear
//       ▼
//   logits   [batch, num_classes]
//
// Class i of the output lines up with labels[i] in the model
// manifest.
//
// Reference: Burn Book §3 (Building Blocks)

use burn::{
    nn::{Initializer, Linear, LinearConfig},
    prelude::*,
    tensor::activation::relu,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally; deriving them again gives conflicting impls.
#[derive(Config, Debug)]
pub struct LoanClassifierConfig {
    pub d_input:     usize,
    pub d_hidden:    usize,
    pub num_classes: usize,
}

impl LoanClassifierConfig {
    /// Build a model with the default (Kaiming uniform) weights.
    /// Loading a record replaces them, so the values only matter
    /// for the shapes they carry.
    pub fn init<B: Backend>(&self, device: &B::Device) -> LoanClassifier<B> {
        self.init_with(
            Initializer::KaimingUniform { gain: 1.0 / 3.0f64.sqrt(), fan_out_only: false },
            device,
        )
    }

    pub fn init_with<B: Backend>(&self, initializer: Initializer, device: &B::Device) -> LoanClassifier<B> {
        let hidden = LinearConfig::new(self.d_input, self.d_hidden)
            .with_initializer(initializer.clone())
            .init(device);
        let output = LinearConfig::new(self.d_hidden, self.num_classes)
            .with_initializer(initializer)
            .init(device);
        LoanClassifier { hidden, output }
    }
}

#[derive(Module, Debug)]
pub struct LoanClassifier<B: Backend> {
    pub hidden: Linear<B>,
    pub output: Linear<B>,
}

impl<B: Backend> LoanClassifier<B> {
    /// features: [batch, d_input] → logits: [batch, num_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.hidden.forward(features));
        self.output.forward(x)
    }
}
