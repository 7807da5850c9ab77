// src/common/ids.rs

use uuid::Uuid;

/// Gera um id curto e único para registros criados durante a sessão (ex: "client-3f2a...").
/// Os registros da massa inicial mantêm os ids fixos ("1", "p1", "inv2").
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let a = generate_id("client");
        let b = generate_id("client");

        assert!(a.starts_with("client-"));
        assert_ne!(a, b);
    }
}
