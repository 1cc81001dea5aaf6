/// Port for asking whether a TCP port can be bound right now.
///
/// The answer is only valid at the instant it is given.
pub trait PortProbe {
    fn is_free(&self, port: u16) -> bool;
}

impl<F> PortProbe for F
where
    F: Fn(u16) -> bool,
{
    fn is_free(&self, port: u16) -> bool {
        self(port)
    }
}
