/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a+(b+c) = a+b+c`
    FlattenSum,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `1+2 = 3`
    /// etc.
    CombineLikeTerms,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `2*a*3 = 6*a`
    MultiplyNumbers,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// `a*a^-1 = a^0`
    /// etc.
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`, for positive `a`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// `(a^b)^n = a^(b*n)`, for integer `n`
    PowerPower,

    /// `(a*b)^n = a^n*b^n`, for integer `n`
    DistributePower,

    /// `2^3 = 8`
    /// `(1/2)^-1 = 2`
    PowerNumbers,

    /// `sin(x)` identity
    Sin,

    /// `cos(x)` identity
    Cos,

    /// `tan(x)` identity
    Tan,
}
