use crate::models::{Advisory, Severity};

/// Fixed guidance shown with a consultation result.
pub fn advisory_for(severity: Severity) -> Advisory {
    let (title, message, wait_time) = match severity {
        Severity::Serious => (
            "Immediate Medical Attention Required",
            "Based on your symptoms, you need immediate medical attention. This doctor may not be immediately available. We strongly recommend consulting one of our available specialists right away.",
            "Immediate attention needed",
        ),
        Severity::Moderate => (
            "Prompt Medical Attention Recommended",
            "Your condition requires attention soon. This doctor will be available in approximately 30 minutes, or you can consult other available specialists.",
            "~30 minutes",
        ),
        Severity::NonSerious => (
            "Regular Consultation",
            "Your symptoms appear to be non-urgent. You can proceed with booking an appointment with this doctor or choose from other available specialists.",
            "~1 hour",
        ),
    };

    Advisory {
        severity,
        title: title.to_string(),
        message: message.to_string(),
        wait_time: wait_time.to_string(),
    }
}
