//! Numeric reply codes.
//!
//! Two tables: the error replies 401–484 and the informational replies the
//! client acts on. [`route`] maps any code to the way the client surfaces it.
//! Codes that appear in neither table are shown verbatim.

/// Error replies (RFC 2812 §5.2), code and symbolic name.
pub const ERROR_REPLIES: &[(u16, &str)] = &[
    (401, "ERR_NOSUCHNICK"),
    (402, "ERR_NOSUCHSERVER"),
    (403, "ERR_NOSUCHCHANNEL"),
    (404, "ERR_CANNOTSENDTOCHAN"),
    (405, "ERR_TOOMANYCHANNELS"),
    (407, "ERR_TOOMANYTARGETS"),
    (411, "ERR_NORECIPIENT"),
    (412, "ERR_NOTEXTTOSEND"),
    (421, "ERR_UNKNOWNCOMMAND"),
    (422, "ERR_NOMOTD"),
    (431, "ERR_NONICKNAMEGIVEN"),
    (432, "ERR_ERRONEUSNICKNAME"),
    (433, "ERR_NICKNAMEINUSE"),
    (436, "ERR_NICKCOLLISION"),
    (437, "ERR_UNAVAILRESOURCE"),
    (441, "ERR_USERNOTINCHANNEL"),
    (442, "ERR_NOTONCHANNEL"),
    (443, "ERR_USERONCHANNEL"),
    (444, "ERR_NOLOGIN"),
    (446, "ERR_USERSDISABLED"),
    (451, "ERR_NOTREGISTERED"),
    (461, "ERR_NEEDMOREPARAMS"),
    (462, "ERR_ALREADYREGISTRED"),
    (463, "ERR_NOPERMFORHOST"),
    (464, "ERR_PASSWDMISMATCH"),
    (467, "ERR_KEYSET"),
    (471, "ERR_CHANNELISFULL"),
    (472, "ERR_UNKNOWNMODE"),
    (473, "ERR_INVITEONLYCHAN"),
    (474, "ERR_BANNEDFROMCHAN"),
    (475, "ERR_BADCHANNELKEY"),
    (477, "ERR_NOCHANMODES"),
    (478, "ERR_BANLISTFULL"),
    (481, "ERR_NOPRIVILEGES"),
    (482, "ERR_CHANOPRIVSNEEDED"),
    (484, "ERR_RESTRICTED"),
];

/// Informational replies the client recognizes, code and symbolic name.
pub const INFO_REPLIES: &[(u16, &str)] = &[
    (1, "RPL_WELCOME"),
    (2, "RPL_YOURHOST"),
    (3, "RPL_CREATED"),
    (4, "RPL_MYINFO"),
    (5, "RPL_ISUPPORT"),
    (20, "RPL_CONNECTIONPROCESS"),
    (42, "RPL_YOURID"),
    (251, "RPL_LUSERCLIENT"),
    (252, "RPL_LUSEROP"),
    (253, "RPL_LUSERUNKNOWN"),
    (254, "RPL_LUSERCHANNELS"),
    (255, "RPL_LUSERME"),
    (265, "RPL_LOCALUSERS"),
    (266, "RPL_GLOBALUSERS"),
    (315, "RPL_ENDOFWHO"),
    (322, "RPL_LIST"),
    (323, "RPL_LISTEND"),
    (332, "RPL_TOPIC"),
    (333, "RPL_TOPICWHOTIME"),
    (353, "RPL_NAMREPLY"),
    (366, "RPL_ENDOFNAMES"),
];

/// `RPL_WELCOME`: registration accepted.
pub const RPL_WELCOME: u16 = 1;
/// `RPL_TOPIC`: current channel topic.
pub const RPL_TOPIC: u16 = 332;
/// `RPL_NAMREPLY`: channel member list.
pub const RPL_NAMREPLY: u16 = 353;
/// `ERR_NOSUCHNICK`
pub const ERR_NOSUCHNICK: u16 = 401;
/// `ERR_NOSUCHSERVER`
pub const ERR_NOSUCHSERVER: u16 = 402;
/// `ERR_NOSUCHCHANNEL`
pub const ERR_NOSUCHCHANNEL: u16 = 403;
/// `ERR_CANNOTSENDTOCHAN`
pub const ERR_CANNOTSENDTOCHAN: u16 = 404;
/// `ERR_ERRONEUSNICKNAME`
pub const ERR_ERRONEUSNICKNAME: u16 = 432;
/// `ERR_NICKNAMEINUSE`
pub const ERR_NICKNAMEINUSE: u16 = 433;
/// `ERR_NOTONCHANNEL`
pub const ERR_NOTONCHANNEL: u16 = 442;

/// How the client surfaces a numeric reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Server banner/info text, shown verbatim in the info pane.
    Server,
    /// Rejection shown as an error line with the server's text.
    Error,
    /// Rejection shown as a warning with the server's text.
    Warn,
    /// Rejection shown as a fixed warning, ignoring the server's text.
    FixedWarn(&'static str),
    /// Channel member list.
    Names,
    /// Channel topic.
    Topic,
    /// Known but not displayed.
    Ignored,
    /// Unknown code, shown as the raw line.
    Passthrough,
}

/// Warning shown for replies that mean "join a channel first".
pub const NOT_ON_CHANNEL_TEXT: &str = "Please register in a channel to perform the required action.";

/// Warning shown when the requested nickname is taken.
pub const NICKNAME_IN_USE_TEXT: &str = "Nick name already in use";

/// Route a numeric reply code.
pub fn route(code: u16) -> Route {
    match code {
        1 | 2 | 3 | 20 | 251 | 252 | 255 | 265 | 266 | 322 => Route::Server,
        ERR_NOSUCHCHANNEL | ERR_CANNOTSENDTOCHAN | ERR_ERRONEUSNICKNAME => Route::Error,
        ERR_NOTONCHANNEL | ERR_NOSUCHNICK => Route::FixedWarn(NOT_ON_CHANNEL_TEXT),
        ERR_NICKNAMEINUSE => Route::FixedWarn(NICKNAME_IN_USE_TEXT),
        ERR_NOSUCHSERVER => Route::Warn,
        RPL_NAMREPLY => Route::Names,
        RPL_TOPIC => Route::Topic,
        4 | 5 | 42 | 253 | 254 | 315 | 323 | 333 | 366 | 422 => Route::Ignored,
        code if is_error(code) => Route::Error,
        _ => Route::Passthrough,
    }
}

/// Code is in the 401–484 error table.
pub fn is_error(code: u16) -> bool {
    ERROR_REPLIES.iter().any(|&(c, _)| c == code)
}

/// Symbolic name of a known code.
pub fn name(code: u16) -> Option<&'static str> {
    ERROR_REPLIES.iter().chain(INFO_REPLIES).find(|&&(c, _)| c == code).map(|&(_, name)| name)
}
