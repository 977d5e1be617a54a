// src/noyau/format.rs

/// Affichage d’un résultat (console + formulaire).
///
/// - décimal le plus court qui relit la même valeur ("0.1", "14", "-0")
/// - forme exposant si l’exposant décimal est < -4 ou >= 6 : "1e+06", "1.5e-07"
/// - "+Inf", "-Inf", "NaN"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // "{:e}" donne déjà la mantisse la plus courte : "1.5e-7"
    let sci = format!("{v:e}");
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return format!("{v}"),
    };

    if (-4..6).contains(&exp) {
        return format!("{v}");
    }

    let signe = if exp < 0 { '-' } else { '+' };
    format!("{mantisse}e{signe}{:02}", exp.abs())
}
