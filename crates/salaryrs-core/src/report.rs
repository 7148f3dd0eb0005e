use crate::forecast::Forecast;

/// One human-readable line with the prediction rounded to two decimals.
pub fn forecast_line(at: f64, salary: f64) -> String {
    format!("My monthly salary forecast after {at} years of experience is R {salary:.2}")
}

pub fn polynomial_forecast(forecast: &Forecast) -> String {
    let p = forecast.poly_prediction;
    forecast_line(p.x, p.y)
}
