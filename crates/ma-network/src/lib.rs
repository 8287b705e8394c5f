//! `ma-network` — road network, frontier selection, and the two greedy tree
//! builders.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`network`]       | `RoadNetwork` (CSR incidence), `RoadNetworkBuilder`     |
//! | [`view`]          | `EdgeSet` (per-run bitmap), `NetworkView`               |
//! | [`frontier`]      | `FrontierKey`, `Frontier`: the shared tie-break rule    |
//! | [`shortest_path`] | `ShortestPathTree`, `Route`                             |
//! | [`spanning`]      | `SpanningNetwork`                                       |
//! | [`error`]         | `NetworkError`, `NetworkResult<T>`                      |
//!
//! # Bookkeeping
//!
//! A built [`RoadNetwork`] is read-only.  Every builder run allocates its own
//! settled/used state, so one network can serve any number of runs, from any
//! number of threads, without reset.

pub mod error;
pub mod frontier;
pub mod network;
pub mod shortest_path;
pub mod spanning;
pub mod view;


pub use error::{NetworkError, NetworkResult};
pub use frontier::{Frontier, FrontierKey};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use shortest_path::{Route, ShortestPathTree};
pub use spanning::SpanningNetwork;
pub use view::{EdgeSet, NetworkView};
