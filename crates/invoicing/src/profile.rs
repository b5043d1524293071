//! Business details printed on every invoice.

use serde::{Deserialize, Serialize};

/// Shop identity, contact details and invoice boilerplate.
///
/// Every field has a default, so a profile file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    pub company_name: String,
    pub tagline: String,
    pub phones: Vec<String>,
    pub email: String,
    pub terms: Vec<String>,
    pub thank_you: String,
    pub closing: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            company_name: "Snapzone Frames".to_string(),
            tagline: "Coimbatore's Best Photo Framing Services".to_string(),
            phones: vec!["+91 77085 54879".to_string(), "+91 94836 92989".to_string()],
            email: "snapzoneframes@gmail.com".to_string(),
            terms: vec![
                "Delivery Time: 1-3 working days for standard frame orders.".to_string(),
                "Same-Day Delivery available across Tamil Nadu (based on location & time of order)."
                    .to_string(),
                "All frames are custom-made and therefore non-returnable.".to_string(),
                "Cash on Delivery is available only within Coimbatore.".to_string(),
                "Please provide high-quality images to ensure the best print and framing results."
                    .to_string(),
                "For any queries, contact us at +91 77085 54879 or +91 94836 92989.".to_string(),
            ],
            thank_you: "Thank you for choosing Snapzone Frames!".to_string(),
            closing: "We're grateful for your support and can't wait to frame more memories for you."
                .to_string(),
        }
    }
}

impl BusinessProfile {
    /// `Phone: a / b`, or `None` when no phone is configured.
    pub fn phone_line(&self) -> Option<String> {
        if self.phones.is_empty() {
            None
        } else {
            Some(format!("Phone: {}", self.phones.join(" / ")))
        }
    }
}
