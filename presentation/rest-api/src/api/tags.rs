use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Pull date calculation and rule guide
    Withdrawal,
}
