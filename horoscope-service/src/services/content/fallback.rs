//! Fallback content store and decorative templates, keyed by sign.

use crate::models::ZodiacSign;
use rand::Rng;
use std::borrow::Cow;

const CANCER_TEMPLATES: [&str; 3] = [
    "🦀 Querida Cáncer: ",
    "🦀 Para ti, Cáncer: ",
    "🦀 Cáncer, mi amor: ",
];

const AQUARIUS_TEMPLATES: [&str; 3] = [
    "🏺 Hermoso Acuario: ",
    "🏺 Para ti, Acuario: ",
    "🏺 Acuario, mi cielo: ",
];

const CANCER_FALLBACKS: [&str; 3] = [
    "🦀 Querida Cáncer: Hoy tu sensibilidad será tu mayor fortaleza. Las energías lunares te favorecen especialmente en el amor y la familia. ✨",
    "🦀 Para ti, Cáncer: Tu intuición maternal te guiará hacia decisiones acertadas. Es un día perfecto para nutrir tus relaciones más cercanas. 💕",
    "🦀 Cáncer, mi amor: Las emociones fluyen positivamente hoy. Confía en tu corazón para tomar las mejores decisiones. 🌙",
];

const AQUARIUS_FALLBACKS: [&str; 3] = [
    "🏺 Hermoso Acuario: Tu espíritu innovador brillará con fuerza especial hoy. Las amistades y conexiones sociales traerán sorpresas maravillosas. ✨",
    "🏺 Para ti, Acuario: Tu originalidad será reconocida y admirada por otros. Es momento de abrazar tu autenticidad completamente. 💫",
    "🏺 Acuario, mi cielo: Las ideas creativas fluyen libremente. Tu visión única del mundo inspirará a quienes te rodean. 🦋",
];

/// The three decorative prefixes for a sign.
pub fn templates(sign: ZodiacSign) -> [Cow<'static, str>; 3] {
    match sign {
        ZodiacSign::Cancer => CANCER_TEMPLATES.map(Cow::Borrowed),
        ZodiacSign::Aquarius => AQUARIUS_TEMPLATES.map(Cow::Borrowed),
        other => {
            let (glyph, name) = (other.glyph(), other.spanish_name());
            [
                Cow::Owned(format!("{} Querido {}: ", glyph, name)),
                Cow::Owned(format!("{} Para ti, {}: ", glyph, name)),
                Cow::Owned(format!("{} {}, mi cielo: ", glyph, name)),
            ]
        }
    }
}

/// The three pre-written messages used when translation fails.
pub fn translation_fallbacks(sign: ZodiacSign) -> [Cow<'static, str>; 3] {
    match sign {
        ZodiacSign::Cancer => CANCER_FALLBACKS.map(Cow::Borrowed),
        ZodiacSign::Aquarius => AQUARIUS_FALLBACKS.map(Cow::Borrowed),
        other => {
            let (glyph, name) = (other.glyph(), other.spanish_name());
            [
                Cow::Owned(format!(
                    "{} Querido {}: Hoy será un día especial lleno de buenas energías para ti. ✨",
                    glyph, name
                )),
                Cow::Owned(format!(
                    "{} Para ti, {}: Confía en tu intuición, el universo está de tu lado. 💫",
                    glyph, name
                )),
                Cow::Owned(format!(
                    "{} {}, mi cielo: Las estrellas iluminan tu camino y traen nuevas oportunidades. 🌙",
                    glyph, name
                )),
            ]
        }
    }
}

/// The single message used when the horoscope itself could not be fetched.
pub fn fetch_fallback(sign: ZodiacSign) -> Cow<'static, str> {
    match sign {
        ZodiacSign::Cancer => Cow::Borrowed(
            "Hoy es un día para cuidar de ti misma y de quienes amas, querida Cáncer. ✨",
        ),
        ZodiacSign::Aquarius => Cow::Borrowed(
            "Tu espíritu innovador brilla especialmente hoy, Acuario. ¡Deja que tu creatividad fluya! ✨",
        ),
        other => Cow::Owned(format!(
            "Hoy será un día especial lleno de buenas energías, {}. ✨",
            other.spanish_name()
        )),
    }
}

fn pick<R: Rng + ?Sized>(options: [Cow<'static, str>; 3], rng: &mut R) -> Cow<'static, str> {
    let [a, b, c] = options;
    match rng.gen_range(0..3) {
        0 => a,
        1 => b,
        _ => c,
    }
}

pub fn select_template<R: Rng + ?Sized>(sign: ZodiacSign, rng: &mut R) -> Cow<'static, str> {
    pick(templates(sign), rng)
}

pub fn select_translation_fallback<R: Rng + ?Sized>(
    sign: ZodiacSign,
    rng: &mut R,
) -> Cow<'static, str> {
    pick(translation_fallbacks(sign), rng)
}

pub fn decorate(template: &str, text: &str) -> String {
    format!("{}{}", template, text)
}
