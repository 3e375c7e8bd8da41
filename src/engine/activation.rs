// 活性化関数は順伝播と逆伝播の両方で使うので、関数のペアとして扱う
use crate::backend::Elm;

/// An activation function together with its derivative.
///
/// `derivative` receives the *output* of `activate` rather than the
/// pre-activation, which is what the backward pass has at hand.
#[derive(Clone, Copy)]
pub struct Activation {
    pub name: &'static str,
    pub activate: fn(Elm) -> Elm,
    pub derivative: fn(Elm) -> Elm,
}

impl Activation {
    pub const SIGMOID: Activation = Activation {
        name: "sigmoid",
        activate: sigmoid,
        derivative: sigmoid_derivative,
    };
}

impl std::fmt::Debug for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activation").field("name", &self.name).finish()
    }
}

/// Distance kept between the sigmoid output and the asymptotes 0 and 1.
pub const SIGMOID_EPSILON: Elm = 1e-6;

/// Logistic function, evaluated so that `exp` never overflows.
///
/// The result is clamped to `[SIGMOID_EPSILON, 1 - SIGMOID_EPSILON]`. In f32
/// the plain formula already rounds to exactly 1.0 for `z` around 17, which
/// would zero `y(1-y)` and stop all learning through a saturated unit.
pub fn sigmoid(z: Elm) -> Elm {
    let y = if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        // z < 0 のとき exp(-z) は大きくなりすぎるので exp(z) 側で計算する
        let e = z.exp();
        e / (1.0 + e)
    };
    y.clamp(SIGMOID_EPSILON, 1.0 - SIGMOID_EPSILON)
}

/// `σ'(z)` written in terms of `y = σ(z)`.
pub fn sigmoid_derivative(y: Elm) -> Elm {
    y * (1.0 - y)
}
