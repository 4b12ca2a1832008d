use super::{ApiError, SignedIn};
use crate::domain::{Credentials, Product, Role, User};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

/// In-process stand-in for the product backend.
///
/// Any credentials that passed validation sign in; the `admin` local part
/// gets the admin role.
#[derive(Debug)]
pub struct DemoBackend {
    products: Vec<Product>,
}

impl DemoBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[tracing::instrument(
        name = "Log in against the demo backend",
        skip(self, credentials),
        fields(email = %credentials.email.as_ref())
    )]
    pub fn login(&self, credentials: &Credentials) -> Result<SignedIn, ApiError> {
        let username = credentials.email.local_part();
        let role = if username.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        };

        Ok(SignedIn {
            access_token: SecretString::from(uuid::Uuid::new_v4().to_string()),
            user: User::new(username, role),
        })
    }

    pub fn get_products(&self, token: &SecretString) -> Result<Vec<Product>, ApiError> {
        if token.expose_secret().is_empty() {
            return Err(ApiError::rejected(StatusCode::UNAUTHORIZED, "Missing access token"));
        }
        Ok(self.products.clone())
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        let product = |id, name: &str, price, description: &str| Product {
            id,
            name: name.into(),
            price,
            description: description.into(),
        };

        Self::new(vec![
            product(1, "無線滑鼠", 690.0, "人體工學設計，長效電池"),
            product(2, "機械鍵盤", 2490.0, "青軸手感，RGB 背光"),
            product(3, "27 吋螢幕", 7990.0, "2K 解析度，IPS 面板"),
            product(4, "USB-C 集線器", 1290.0, "七合一擴充，支援 4K 輸出"),
        ])
    }
}
