//! Enumerated kernel configuration
//!
//! [`KernelSpec`] names every kernel in the catalog together with its
//! optional parameters. Unset parameters take the kernel's default.

use crate::kernel::{
    AdditiveChi2Kernel, AnovaKernel, CauchyKernel, Chi2Kernel, ExponentialKernel,
    GeneralizedHistogramIntersectionKernel, InverseMultiquadraticKernel, Kernel, LaplacianKernel,
    LogKernel, MinKernel, PowerKernel, RationalQuadraticKernel, TStudentKernel,
};

/// Construction-time description of a kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelSpec {
    Exponential { sigma: Option<f64> },
    Laplacian { sigma: Option<f64> },
    RationalQuadratic { c: Option<f64> },
    InverseMultiquadratic { c: Option<f64> },
    Cauchy { sigma: Option<f64> },
    TStudent { degree: Option<f64> },
    Log { d: Option<f64> },
    Power { d: Option<f64> },
    Anova { sigma: Option<f64>, d: Option<f64> },
    AdditiveChi2,
    Chi2 { gamma: Option<f64> },
    Min,
    GeneralizedHistogramIntersection { alpha: Option<f64> },
}

impl KernelSpec {
    /// Every kernel in the catalog with default parameters
    pub fn all() -> [KernelSpec; 13] {
        [
            KernelSpec::Exponential { sigma: None },
            KernelSpec::Laplacian { sigma: None },
            KernelSpec::RationalQuadratic { c: None },
            KernelSpec::InverseMultiquadratic { c: None },
            KernelSpec::Cauchy { sigma: None },
            KernelSpec::TStudent { degree: None },
            KernelSpec::Log { d: None },
            KernelSpec::Power { d: None },
            KernelSpec::Anova {
                sigma: None,
                d: None,
            },
            KernelSpec::AdditiveChi2,
            KernelSpec::Chi2 { gamma: None },
            KernelSpec::Min,
            KernelSpec::GeneralizedHistogramIntersection { alpha: None },
        ]
    }

    /// Construct the described kernel
    ///
    /// # Panics
    /// Panics if a given parameter is outside the kernel's valid range
    pub fn build(&self) -> Box<dyn Kernel> {
        match *self {
            KernelSpec::Exponential { sigma } => Box::new(
                sigma.map_or_else(ExponentialKernel::new, ExponentialKernel::with_sigma),
            ),
            KernelSpec::Laplacian { sigma } => Box::new(
                sigma.map_or_else(LaplacianKernel::new, LaplacianKernel::with_sigma),
            ),
            KernelSpec::RationalQuadratic { c } => Box::new(
                c.map_or_else(RationalQuadraticKernel::default, RationalQuadraticKernel::new),
            ),
            KernelSpec::InverseMultiquadratic { c } => Box::new(c.map_or_else(
                InverseMultiquadraticKernel::default,
                InverseMultiquadraticKernel::new,
            )),
            KernelSpec::Cauchy { sigma } => {
                Box::new(sigma.map_or_else(CauchyKernel::new, CauchyKernel::with_sigma))
            }
            KernelSpec::TStudent { degree } => {
                Box::new(degree.map_or_else(TStudentKernel::default, TStudentKernel::new))
            }
            KernelSpec::Log { d } => Box::new(d.map_or_else(LogKernel::default, LogKernel::new)),
            KernelSpec::Power { d } => {
                Box::new(d.map_or_else(PowerKernel::default, PowerKernel::new))
            }
            KernelSpec::Anova { sigma, d } => {
                let defaults = AnovaKernel::default();
                Box::new(AnovaKernel::new(
                    sigma.unwrap_or(defaults.sigma()),
                    d.unwrap_or(defaults.degree()),
                ))
            }
            KernelSpec::AdditiveChi2 => Box::new(AdditiveChi2Kernel::new()),
            KernelSpec::Chi2 { gamma } => {
                Box::new(gamma.map_or_else(Chi2Kernel::default, Chi2Kernel::new))
            }
            KernelSpec::Min => Box::new(MinKernel::new()),
            KernelSpec::GeneralizedHistogramIntersection { alpha } => Box::new(alpha.map_or_else(
                GeneralizedHistogramIntersectionKernel::default,
                GeneralizedHistogramIntersectionKernel::new,
            )),
        }
    }
}
