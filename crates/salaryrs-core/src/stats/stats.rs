pub fn rss(y: &[f64], y_hat: &[f64]) -> f64 {
    y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum()
}

pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    Some((rss(y, y_hat) / y.len() as f64).sqrt())
}

pub fn aic_from_rss(rss: f64, n: usize, k: usize) -> f64 {
    if rss <= 0.0 || n == 0 {
        return f64::NEG_INFINITY; // exact fit, log(0)
    }
    n as f64 * (rss / n as f64).ln() + 2.0 * k as f64
}

/// Total sum of squares around the mean.
pub fn tss(y: &[f64]) -> f64 {
    let y_mean = y.iter().sum::<f64>() / y.len() as f64;
    y.iter().map(|&yi| (yi - y_mean).powi(2)).sum()
}

pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.len() < 2 {
        return None;
    }
    let ss_tot = tss(y);
    (ss_tot != 0.0).then(|| 1.0 - rss(y, y_hat) / ss_tot)
}

/// R² penalised for `k` predictors, intercept excluded.
pub fn adjusted_r2(r2: f64, n: usize, k: usize) -> f64 {
    // residual degrees of freedom
    let Some(df) = n.checked_sub(k + 1).filter(|&df| df > 0) else {
        return r2;
    };
    1.0 - (1.0 - r2) * (n - 1) as f64 / df as f64
}
