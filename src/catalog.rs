/// Product catalog heuristics and the synthetic credential generator
///
/// A purchase yields a batch of generated account credentials. The batch
/// size is derived from the product name alone; the credentials themselves
/// are independently drawn with no uniqueness guarantee, within an order
/// or across orders.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A generated username/password pair. Synthetic: never validated against
/// registered users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCredential {
    pub username: String,
    pub password: String,
}

const USERNAME_PREFIX: &str = "val_";
const USERNAME_LEN: usize = 8;
const PASSWORD_LEN: usize = 12;

const USERNAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#";

/// Number of credentials a product yields.
///
/// "(1)" is checked first, then "5" unconditionally, so a name containing
/// both substrings resolves to 5. Kept in this exact order on purpose.
pub fn account_count(product_name: &str) -> usize {
    let mut count = 10;
    if product_name.contains("(1)") {
        count = 1;
    }
    if product_name.contains('5') {
        count = 5;
    }
    count
}

fn random_chars(charset: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Generate one synthetic credential
pub fn generate_credential() -> AccountCredential {
    AccountCredential {
        username: format!(
            "{}{}",
            USERNAME_PREFIX,
            random_chars(USERNAME_CHARSET, USERNAME_LEN)
        ),
        password: random_chars(PASSWORD_CHARSET, PASSWORD_LEN),
    }
}

/// Generate the full credential batch for a product
pub fn generate_credentials(product_name: &str) -> Vec<AccountCredential> {
    (0..account_count(product_name))
        .map(|_| generate_credential())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_ten() {
        assert_eq!(account_count("Combo Random Valorant Accounts"), 10);
    }

    #[test]
    fn count_five_for_names_containing_five() {
        assert_eq!(account_count("Combo 5 Random Valorant Accounts"), 5);
    }

    #[test]
    fn count_one_for_single_account_product() {
        assert_eq!(account_count("Starter Pack (1)"), 1);
    }

    #[test]
    fn five_wins_when_both_markers_present() {
        // "(1)" is evaluated first, "5" re-checked after
        assert_eq!(account_count("Bundle (1) of 5"), 5);
    }

    #[test]
    fn credential_shape() {
        let cred = generate_credential();
        assert!(cred.username.starts_with(USERNAME_PREFIX));
        assert_eq!(cred.username.len(), USERNAME_PREFIX.len() + USERNAME_LEN);
        assert_eq!(cred.password.len(), PASSWORD_LEN);
        assert!(cred
            .username
            .bytes()
            .skip(USERNAME_PREFIX.len())
            .all(|b| USERNAME_CHARSET.contains(&b)));
        assert!(cred.password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
    }

    #[test]
    fn batch_size_follows_product_name() {
        assert_eq!(generate_credentials("Starter Pack (1)").len(), 1);
        assert_eq!(generate_credentials("Combo 5 Pack").len(), 5);
        assert_eq!(generate_credentials("Mega Combo").len(), 10);
    }
}
