//! Gateway Traits - Outbound ports to external services
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────────
//! trait BlobClient          │  FsBlobClient
//!   fn download_content()   │  InMemoryBlobClient
//! trait CryptographyClient  │  RsaCryptographyClient
//!   fn decrypt()            │
//! ```

pub mod blob_client;
pub mod cryptography_client;
