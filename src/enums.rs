#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    #[default]
    Ground,
    Escape,
    Csi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Print,
    Hold,
    Begin,
    Recover,
    Put,
    Dispatch,
}
