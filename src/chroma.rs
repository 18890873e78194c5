use crate::image::FrameF32;

/// Scales the two chroma channels of a motion frame; lightness is untouched.
#[derive(Clone, Copy, Debug)]
pub struct ChromaAttenuator {
    factor: f32,
}

impl ChromaAttenuator {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn attenuate(&self, mut frame: FrameF32) -> FrameF32 {
        self.attenuate_in_place(&mut frame);
        frame
    }

    pub fn attenuate_in_place(&self, frame: &mut FrameF32) {
        for px in &mut frame.data {
            px[1] *= self.factor;
            px[2] *= self.factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_chroma_channels_are_scaled() {
        let mut frame = FrameF32::new(3, 2);
        for (i, px) in frame.data.iter_mut().enumerate() {
            let v = i as f32 * 1.37 - 2.0;
            *px = [v.sin() * 100.0, v, -3.0 * v];
        }
        let out = ChromaAttenuator::new(0.1).attenuate(frame.clone());
        for (a, b) in frame.data.iter().zip(out.data.iter()) {
            assert_eq!(a[0].to_bits(), b[0].to_bits());
            assert_eq!(b[1], a[1] * 0.1);
            assert_eq!(b[2], a[2] * 0.1);
        }
    }

    #[test]
    fn unit_factor_is_identity() {
        let frame = FrameF32::filled(2, 2, [1.0, 2.0, 3.0]);
        assert_eq!(ChromaAttenuator::new(1.0).attenuate(frame.clone()), frame);
    }
}
