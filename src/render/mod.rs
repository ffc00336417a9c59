pub(crate) mod canvas;
pub(crate) mod cpu;
pub(crate) mod frame_loop;
pub(crate) mod session;
pub(crate) mod surface;
pub(crate) mod trail;
