use crate::numeric::Element;

/// `x` when positive, zero otherwise.
#[inline(always)]
pub fn relu<T: Element>(x: T) -> T {
    if x > T::zero() {
        x
    } else {
        T::zero()
    }
}

/// Logistic function, evaluated in `f64`.
#[inline(always)]
pub fn sigmoid<T: Element>(x: T) -> T {
    T::from_f64(logistic(x.as_f64()))
}

/// Hyperbolic tangent, evaluated in `f64`.
#[inline(always)]
pub fn tanh<T: Element>(x: T) -> T {
    T::from_f64(x.as_f64().tanh())
}

/// `x` when positive, `0.01 * x` otherwise.
#[inline(always)]
pub fn leaky_relu<T: Element>(x: T) -> T {
    if x > T::zero() {
        x
    } else {
        T::from_f64(0.01 * x.as_f64())
    }
}

/// `x` when non-negative, `e^x - 1` otherwise.
#[inline(always)]
pub fn elu<T: Element>(x: T) -> T {
    if x >= T::zero() {
        x
    } else {
        T::from_f64(x.as_f64().exp() - 1.0)
    }
}

#[inline(always)]
pub fn linear<T: Element>(x: T) -> T {
    x
}

#[inline(always)]
pub fn d_relu<T: Element>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else {
        T::zero()
    }
}

#[inline(always)]
pub fn d_sigmoid<T: Element>(x: T) -> T {
    let s = logistic(x.as_f64());
    T::from_f64(s * (1.0 - s))
}

#[inline(always)]
pub fn d_tanh<T: Element>(x: T) -> T {
    let t = x.as_f64().tanh();
    T::from_f64(1.0 - t * t)
}

/// `1` when positive, `1 / 100` otherwise.
///
/// The division happens in `T`, so integers get 0 and floats get 0.01.
#[inline(always)]
pub fn d_leaky_relu<T: Element>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else {
        T::one() / T::from_f64(100.0)
    }
}

#[inline(always)]
pub fn d_elu<T: Element>(x: T) -> T {
    if x >= T::zero() {
        T::one()
    } else {
        T::from_f64(x.as_f64().exp())
    }
}

#[inline(always)]
pub fn d_linear<T: Element>(_: T) -> T {
    T::one()
}

#[inline(always)]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// A forward function paired with its derivative.
pub trait Activation<T: Element> {
    fn activate(&self, x: T) -> T;
    fn differentiate(&self, x: T) -> T;
}

macro_rules! activation {
    ($(#[$meta:meta])* $name:ident => $f:ident, $d:ident) => {
        $(#[$meta])*
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T> Activation<T> for $name
        where
            T: Element,
        {
            #[inline(always)]
            fn activate(&self, x: T) -> T {
                $f(x)
            }

            #[inline(always)]
            fn differentiate(&self, x: T) -> T {
                $d(x)
            }
        }
    };
}

activation!(Relu => relu, d_relu);
activation!(Sigmoid => sigmoid, d_sigmoid);
activation!(Tanh => tanh, d_tanh);
activation!(LeakyRelu => leaky_relu, d_leaky_relu);
activation!(Elu => elu, d_elu);
activation!(
    /// Identity, the default when nothing else is asked for.
    Linear => linear, d_linear
);

/// One column of the benchmark table, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Relu,
    Sigmoid,
    Tanh,
    LeakyRelu,
    Elu,
    Linear,
    DRelu,
    DSigmoid,
    DTanh,
    DLeakyRelu,
    DElu,
    DLinear,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::Relu,
        Column::Sigmoid,
        Column::Tanh,
        Column::LeakyRelu,
        Column::Elu,
        Column::Linear,
        Column::DRelu,
        Column::DSigmoid,
        Column::DTanh,
        Column::DLeakyRelu,
        Column::DElu,
        Column::DLinear,
    ];

    /// Header label.
    #[rustfmt::skip]
    pub fn label(self) -> &'static str {
        match self {
            Column::Relu       => "ReLU",
            Column::Sigmoid    => "Sigmoid",
            Column::Tanh       => "Tanh",
            Column::LeakyRelu  => "LeakyReLU",
            Column::Elu        => "ELU",
            Column::Linear     => "Linear",
            Column::DRelu      => "dReLU",
            Column::DSigmoid   => "dSigmoid",
            Column::DTanh      => "dTanh",
            Column::DLeakyRelu => "dLeakyReLU",
            Column::DElu       => "dELU",
            Column::DLinear    => "dLinear",
        }
    }

    pub fn is_derivative(self) -> bool {
        self >= Column::DRelu
    }
}
