use std::borrow::Cow;
use std::sync::Arc;

/// Read surface of a standard-gauge (European) railway.
pub trait EuropeanRailway: Send + Sync {
    /// Track gauge in millimetres.
    fn european_gauge_width(&self) -> i32;
    fn european_standard(&self) -> Cow<'_, str>;
    fn european_description(&self) -> Cow<'_, str>;
}

/// Read surface of a wide-gauge railway.
pub trait WideGaugeRailway: Send + Sync {
    /// Track gauge in millimetres.
    fn wide_gauge_width(&self) -> i32;
    fn wide_gauge_standard(&self) -> Cow<'_, str>;
    fn wide_gauge_description(&self) -> Cow<'_, str>;
}

impl<T: EuropeanRailway + ?Sized> EuropeanRailway for &T {
    fn european_gauge_width(&self) -> i32 {
        (**self).european_gauge_width()
    }

    fn european_standard(&self) -> Cow<'_, str> {
        (**self).european_standard()
    }

    fn european_description(&self) -> Cow<'_, str> {
        (**self).european_description()
    }
}

impl<T: EuropeanRailway + ?Sized> EuropeanRailway for Arc<T> {
    fn european_gauge_width(&self) -> i32 {
        (**self).european_gauge_width()
    }

    fn european_standard(&self) -> Cow<'_, str> {
        (**self).european_standard()
    }

    fn european_description(&self) -> Cow<'_, str> {
        (**self).european_description()
    }
}

impl<T: WideGaugeRailway + ?Sized> WideGaugeRailway for &T {
    fn wide_gauge_width(&self) -> i32 {
        (**self).wide_gauge_width()
    }

    fn wide_gauge_standard(&self) -> Cow<'_, str> {
        (**self).wide_gauge_standard()
    }

    fn wide_gauge_description(&self) -> Cow<'_, str> {
        (**self).wide_gauge_description()
    }
}

impl<T: WideGaugeRailway + ?Sized> WideGaugeRailway for Arc<T> {
    fn wide_gauge_width(&self) -> i32 {
        (**self).wide_gauge_width()
    }

    fn wide_gauge_standard(&self) -> Cow<'_, str> {
        (**self).wide_gauge_standard()
    }

    fn wide_gauge_description(&self) -> Cow<'_, str> {
        (**self).wide_gauge_description()
    }
}
