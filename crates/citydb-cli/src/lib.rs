//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` record queries.
//!
//! This crate primarily provides a binary (`citydb-cli`). We include a small
//! library target so that the documentation page shows this overview.
//!
//! Basic usage:
//!
//! ```text
//! citydb-cli --help
//! citydb-cli                        # standard report
//! citydb-cli stats
//! citydb-cli country spain --above 12
//! citydb-cli cities mun
//! ```
//!
//! For programmatic access to records, `select_where` and `aggregate`, use
//! the `citydb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
