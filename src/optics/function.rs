//! Shared, type-erased function shapes stored inside optics.
//!
//! Every optic keeps its primitives behind `Arc<dyn Fn .. + Send + Sync>`, so
//! cloning an optic is a reference-count bump and any optic can cross threads.

use std::sync::Arc;

/// `&S -> A`: total read.
pub(crate) type GetFunction<S, A> = Arc<dyn Fn(&S) -> A + Send + Sync>;

/// `(S, A) -> S`: replace the single focus.
pub(crate) type SetFunction<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;

/// `&S -> Option<A>`: partial read.
pub(crate) type PreviewFunction<S, A> = Arc<dyn Fn(&S) -> Option<A> + Send + Sync>;

/// `A -> S`: build the whole from a focus.
pub(crate) type ReviewFunction<S, A> = Arc<dyn Fn(A) -> S + Send + Sync>;

/// `&S -> [A]`: read every focus in encounter order.
pub(crate) type GetAllFunction<S, A> = Arc<dyn Fn(&S) -> Vec<A> + Send + Sync>;

/// `(S, A -> A) -> S`: rewrite every focus in encounter order.
pub(crate) type ModifyFunction<S, A> = Arc<dyn Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync>;

/// `&S -> bool`: whether a partial read would succeed, without producing it.
pub(crate) type MatchFunction<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;
