use std::fmt;

/// Outcome of one scheduled run, per delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryReport {
    pub email_sent: bool,
    pub sms_sent: bool,
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Email: {}, SMS: {}",
            mark(self.email_sent),
            mark(self.sms_sent)
        )
    }
}
