use rectify_core::prelude::*;

/// Where a layer runs its kernels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Cpu,
    Gpu,
}

impl Mode {
    /// Whether kernels for this mode were compiled into this build.
    pub fn is_available(&self) -> bool {
        match self {
            Mode::Cpu => Cpu::is_available(),
            Mode::Gpu => Gpu::is_available(),
        }
    }
}

/// Configuration for [ReLU].
///
/// Without a negative slope the layer is a standard rectifier. With one, negative
/// inputs are scaled by it instead of zeroed.
///
/// ```rust
/// # use rectify::prelude::*;
/// let config = ReLUConfig::default().with_negative_slope(0.01);
/// assert_eq!(config.negative_slope, Some(0.01));
/// assert_eq!(config.mode, Mode::Cpu);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReLUConfig {
    pub negative_slope: Option<f64>,
    pub mode: Mode,
}

impl ReLUConfig {
    pub fn with_negative_slope(mut self, negative_slope: f64) -> Self {
        self.negative_slope = Some(negative_slope);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Rectified linear unit layer, optionally leaky. See [relu_forward()] and [relu_backward()].
///
/// Reads its input from the bottom [Blob] and writes its output to the top [Blob].
/// Both must hold the same number of elements, use [ReLU::reshape] to size the top blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReLU<E> {
    negative_slope: Option<E>,
    mode: Mode,
}

impl<E: Dtype> ReLU<E> {
    /// Builds the layer, failing with [Error::NoGpu] if `config.mode` is not
    /// available in this build, or with [Error::UnrepresentableSlope] if the
    /// negative slope cannot be converted to `E`.
    pub fn try_new(config: ReLUConfig) -> Result<Self, Error> {
        if !config.mode.is_available() {
            log::error!("{:?} mode is not compiled into this build", config.mode);
            return Err(Error::NoGpu);
        }
        let negative_slope = config
            .negative_slope
            .map(|s| E::from_f64(s).ok_or(Error::UnrepresentableSlope))
            .transpose()?;
        log::debug!(
            "ReLU<{}> negative_slope={negative_slope:?} mode={:?}",
            std::any::type_name::<E>(),
            config.mode
        );
        Ok(Self {
            negative_slope,
            mode: config.mode,
        })
    }

    pub fn new(config: ReLUConfig) -> Self {
        Self::try_new(config).unwrap()
    }

    pub fn negative_slope(&self) -> Option<E> {
        self.negative_slope
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Slope used in the backward pass, `0` for the standard rectifier.
    fn backward_slope(&self) -> E {
        self.negative_slope.unwrap_or_else(E::zero)
    }

    /// Resizes `top` to hold as many elements as `bottom`.
    pub fn reshape(&self, bottom: &Blob<E>, top: &mut Blob<E>) {
        top.reshape_like(bottom);
    }

    /// Writes the activations of `bottom` into `top`.
    pub fn try_forward(&self, bottom: &Blob<E>, top: &mut Blob<E>) -> Result<(), Error> {
        check_counts(bottom.count(), top.count())?;
        let (inp, out) = (bottom.data(), top.data_mut());
        match self.mode {
            Mode::Cpu => try_relu_forward(&Cpu, inp, out, self.negative_slope),
            Mode::Gpu => try_relu_forward(&Gpu, inp, out, self.negative_slope),
        }
    }

    pub fn forward(&self, bottom: &Blob<E>, top: &mut Blob<E>) {
        self.try_forward(bottom, top).unwrap()
    }

    /// Forward pass where bottom and top are the same blob.
    pub fn try_forward_inplace(&self, blob: &mut Blob<E>) -> Result<(), Error> {
        let buf = blob.data_mut();
        match self.mode {
            Mode::Cpu => try_relu_forward_inplace(&Cpu, buf, self.negative_slope),
            Mode::Gpu => try_relu_forward_inplace(&Gpu, buf, self.negative_slope),
        }
    }

    pub fn forward_inplace(&self, blob: &mut Blob<E>) {
        self.try_forward_inplace(blob).unwrap()
    }

    /// Writes the gradient w.r.t. `bottom` into `bottom.diff`, from `top.diff`
    /// and the layer input in `bottom.data`.
    ///
    /// Does nothing, not even checking counts, when `propagate_down` is false.
    pub fn try_backward(
        &self,
        top: &Blob<E>,
        propagate_down: bool,
        bottom: &mut Blob<E>,
    ) -> Result<(), Error> {
        if !propagate_down {
            return Ok(());
        }
        check_counts(bottom.count(), top.count())?;
        let slope = self.backward_slope();
        let (inp, grad_inp) = bottom.data_and_diff_mut();
        match self.mode {
            Mode::Cpu => try_relu_backward(&Cpu, inp, top.diff(), grad_inp, true, slope),
            Mode::Gpu => try_relu_backward(&Gpu, inp, top.diff(), grad_inp, true, slope),
        }
    }

    pub fn backward(&self, top: &Blob<E>, propagate_down: bool, bottom: &mut Blob<E>) {
        self.try_backward(top, propagate_down, bottom).unwrap()
    }

    /// Backward pass for a blob that went through [ReLU::try_forward_inplace].
    /// `blob.diff` holds the upstream gradient and is rescaled in place.
    ///
    /// `blob.data` holds the forward output at this point, so the gradient is
    /// only correct for a negative slope `>= 0`.
    pub fn try_backward_inplace(
        &self,
        blob: &mut Blob<E>,
        propagate_down: bool,
    ) -> Result<(), Error> {
        let slope = self.backward_slope();
        let (out, grad) = blob.data_and_diff_mut();
        match self.mode {
            Mode::Cpu => try_relu_backward_inplace(&Cpu, out, grad, propagate_down, slope),
            Mode::Gpu => try_relu_backward_inplace(&Gpu, out, grad, propagate_down, slope),
        }
    }

    pub fn backward_inplace(&self, blob: &mut Blob<E>, propagate_down: bool) {
        self.try_backward_inplace(blob, propagate_down).unwrap()
    }
}

fn check_counts(expected: usize, found: usize) -> Result<(), Error> {
    if expected != found {
        return Err(Error::WrongNumElements { expected, found });
    }
    Ok(())
}
