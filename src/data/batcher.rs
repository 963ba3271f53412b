// ============================================================
// Layer 4 — Window Batcher
// ============================================================
// Implements Burn's Batcher trait so a classifier's DataLoader
// can stack WindowSamples into tensors.
//
//   Input:  Vec of N WindowSamples, each with F features
//   Output: WindowBatch with features [N, F] and targets [N]
//
// Features arrive as f64 and are narrowed to the backend's
// float element on the way in.

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::WindowSample;

// ─── WindowBatch ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct WindowBatch<B: Backend> {
    /// Flattened windows — shape: [batch_size, interval * row_width]
    pub features: Tensor<B, 2>,

    /// Class indices — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── WindowBatcher ────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct WindowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> WindowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<WindowSample, WindowBatch<B>> for WindowBatcher<B> {
    fn batch(&self, items: Vec<WindowSample>) -> WindowBatch<B> {
        let batch_size = items.len();
        // Every window in a run has the same width
        let width      = items.first().map_or(0, |s| s.features.len());

        let flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().map(|&v| v as f32))
            .collect();

        let labels: Vec<i32> = items
            .iter()
            .map(|s| s.label as i32)
            .collect();

        let features = Tensor::<B, 1>::from_floats(
            flat.as_slice(), &self.device
        ).reshape([batch_size, width]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            labels.as_slice(), &self.device
        );

        WindowBatch { features, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_batch_shapes() {
        let device  = Default::default();
        let batcher = WindowBatcher::<TestBackend>::new(device);

        let items = vec![
            WindowSample { features: vec![1.0, 2.0, 3.0], label: 0 },
            WindowSample { features: vec![4.0, 5.0, 6.0], label: 2 },
        ];
        let batch = batcher.batch(items);

        assert_eq!(batch.features.dims(), [2, 3]);
        assert_eq!(batch.targets.dims(), [2]);

        let values = batch.features.into_data().to_vec::<f32>().unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
