use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date, e.g. `05 de marzo, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {}, {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

pub fn email_subject(date: NaiveDate) -> String {
    format!("✨ Tus horóscopos del {} ✨", format_date(date))
}

pub fn email_body(date: NaiveDate, messages: &[String]) -> String {
    format!(
        "¡Buenos días, mi amor! 💖\n\
         \n\
         Aquí tienes tus horóscopos del día - {}\n\
         \n\
         {}\n\
         \n\
         ¡Que tengas un día maravilloso lleno de amor y buenas energías! ✨\n\
         \n\
         Con todo mi amor 💕",
        format_date(date),
        messages.join("\n\n")
    )
}

pub fn sms_body(date: NaiveDate, messages: &[String]) -> String {
    format!(
        "🌟 Horóscopos de hoy - {} 🌟\n\n{}\n\n¡Te amo! 💕",
        format_date(date),
        messages.join("\n\n")
    )
}
