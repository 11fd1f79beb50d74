/// Weights and biases of the 1-2-1 tanh network.
///
/// ```text
///        ┌─ tanh(w1·x + b1) ─ w3 ─┐
///   x ───┤                        ├─ tanh(Σ + b3) ─── y
///        └─ tanh(w2·x + b2) ─ w4 ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkParameters {
    pub w1: f32,
    pub b1: f32,
    pub w2: f32,
    pub b2: f32,
    pub w3: f32,
    pub w4: f32,
    pub b3: f32,
}

impl Default for NetworkParameters {
    fn default() -> Self {
        Self::new(1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0)
    }
}

impl NetworkParameters {
    pub fn new(w1: f32, b1: f32, w2: f32, b2: f32, w3: f32, w4: f32, b3: f32) -> Self {
        Self { w1, b1, w2, b2, w3, w4, b3 }
    }

    /// Every parameter drawn uniformly from [-1, 1).
    pub fn random() -> Self {
        let sample = || rand::random::<f32>() * 2.0 - 1.0;
        Self {
            w1: sample(),
            b1: sample(),
            w2: sample(),
            b2: sample(),
            w3: sample(),
            w4: sample(),
            b3: sample(),
        }
    }

    /// Network output for input `x`:
    /// `tanh(w3·tanh(w1·x + b1) + w4·tanh(w2·x + b2) + b3)`.
    ///
    /// Total over finite inputs. Non-finite parameters propagate NaN instead of panicking.
    pub fn evaluate(&self, x: f32) -> f32 {
        let (h1, h2) = self.hidden(x);
        (f64::from(self.w3) * h1 + f64::from(self.w4) * h2 + f64::from(self.b3)).tanh() as f32
    }

    /// Activations of the two hidden units.
    pub fn hidden(&self, x: f32) -> (f64, f64) {
        let h1 = f64::from(self.w1 * x + self.b1).tanh();
        let h2 = f64::from(self.w2 * x + self.b2).tanh();
        (h1, h2)
    }

    pub fn is_finite(&self) -> bool {
        [self.w1, self.b1, self.w2, self.b2, self.w3, self.w4, self.b3]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Labelled mutable access in formula order (w3, w1, b1, w4, w2, b2, b3).
    pub fn fields_mut(&mut self) -> [(&'static str, &mut f32); 7] {
        [
            ("w3", &mut self.w3),
            ("w1", &mut self.w1),
            ("b1", &mut self.b1),
            ("w4", &mut self.w4),
            ("w2", &mut self.w2),
            ("b2", &mut self.b2),
            ("b3", &mut self.b3),
        ]
    }
}
