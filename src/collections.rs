mod count;
mod forwarding;
mod instrumented;
mod naive;
mod set_like;

pub use count::Count;
pub use forwarding::ForwardingSet;
pub use instrumented::InstrumentedSet;
pub use naive::NaiveCountingSet;
pub use set_like::insert_each;
pub use set_like::SetLike;
