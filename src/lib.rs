pub mod dispatch;
pub mod mac;
pub mod netif;
pub mod wol;
