use crate::fields::RequiredField;

/// Reply sent when every required field is present.
pub const SUCCESS_REPLY: &str = "✅ ได้รับรายงานเลือกตั้งครบถ้วน ขอบคุณครับ";

/// Sample command appended to incomplete-report replies.
pub const USAGE_EXAMPLE: &str = "(ตัวอย่าง: #รายงาน หน่วยที่ 5, ผู้มาใช้สิทธิ์ 100, คะแนนรวม 95, สถานการณ์ ปกติ, ผู้รายงาน สมชาย)";

const INCOMPLETE_HEADER: &str = "⚠️ รายงานยังไม่ครบถ้วนครับ\nกรุณาระบุข้อมูลต่อไปนี้ให้ครบ:";

/// Builds the chat reply for a validation result.
pub fn compose_reply(missing: &[RequiredField]) -> String {
    if missing.is_empty() {
        return SUCCESS_REPLY.to_string();
    }
    let bullets = missing
        .iter()
        .map(|field| field.keyword())
        .collect::<Vec<_>>()
        .join("\n- ");
    format!("{INCOMPLETE_HEADER}\n- {bullets}\n\n{USAGE_EXAMPLE}")
}
