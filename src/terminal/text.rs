//! Fixed terminal copy: help, biography and the edit-mode menu.

pub const HELP_GENERAL: &str = r####"COMANDOS DISPONÍVEIS:
/help          - Mostra esta ajuda
/clear         - Limpa o terminal
/list          - Lista todos os posts
/view <id>     - Visualiza post específico
/sobre         - Informações sobre o autor
/login <senha> - Login admin"####;

pub const HELP_ADMIN: &str = r####"COMANDOS ADMIN:
/logout        - Sair da conta
/newpost       - Criar novo post
/salvar        - Salvar post em edição
/cancelar      - Cancelar edição
/title <texto> - Definir título
/type <tipo>   - Escolher tipo <diario, projeto, reflexao, arte>
/tags <lista>  - Adicionar tags <separadas por vírgula>"####;

/// Help text; admin-only commands are appended only for admin sessions.
pub fn help(admin: bool) -> String {
    if admin {
        format!("{}\n\n{}", HELP_GENERAL, HELP_ADMIN)
    } else {
        HELP_GENERAL.to_string()
    }
}

/// Biography shown by /sobre, ASCII art included, verbatim.
pub const ABOUT: &str = r####"Olá! Me chamo Alan José, e este é meu espaço pessoal em ASCII.

Sou desenvolvedor backend Python, 
com experiência em criação de APIs, automações, e sistemas para web.

Também atuo como analista de dados, onde transformo números em decisões, 
usando ferramentas como Python e Power BI.

Minha paixão por jogos me acompanha desde criança. 
E, com o tempo, descobri outra forma de arte que me fascina: ASCII art. 
A beleza das imagens feitas só com caracteres me lembra que a simplicidade também pode ser poderosa.

Este blog é meu diário digital, meu portfólio, e meu refúgio criativo. Tudo em texto, tudo no terminal — como deve ser.

Use `/list` para explorar o que eu tenho publicado.

Nos vemos por aqui.

>"Obrigado por visitar!"

--=++++++++++++++++++++++++++++++++++********+++**++++***+++******************
::::::--=++++++++++++++++++++*#@%#*#%@@@@@%#%%%%##*++*************************
---:::-:::::---=++++++++++++*%@@@@@@@@@@@@@@@@@@@@%%##************************
-:::::::::::::-:::---==+++++#@@@@@@@@@@@@@@@@@@@@@@@%##***********************
:::::::::::::::--::::::---=+%@@@@@@@@@@@@@@@@@@@@@@@@@@@%##**************#*##*
:::::::::::::::::::--:--+%#@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@%##****#######******
:::::::::::::::::::--*@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@%#######****#######
::::::::::::::::::::#%@@@@@@@@%%@@@*+==+@@@@@@@@@@@@@@@@@@@@@@####*####*####*+
:::::..:::::::::::::+*@@@@@@@#*###+====+%#@@@@@@@@@@@@@@@@@@@@@%##########*+++
:::::::::::::::::::=+@@@@@@@*+++===----=@%@@@#@@@@@@@@@@@@@@@@@%#######**+++++
:::::::::::::::::::-%@@@@@#*++========+%@@@#@@@@@@@@@@@@@@@@@@@####%#*++*+++++
..::::::::::::::::::=%@@@@@@%*++++*@@@@@@@@@%@@@%@@@@@@@@@@@@@@*+++**+++++++++
.......:...:::::::::+%*@@@@@@%*+++*%@@@@@@@@@@##+#@@@@@@@@@@@@@%+++*++++++++++
.......:...........::--@@@@@@@@*++#@@@@%#+*@@@%++*%@@@@@@@@@@@@%++++++++++++==
......-=...............+@@%@@@%=--+*%@%*=::=+**++=+@@@@@@@@@@@@#+==++===++====
......+:...............-%@@@@*-::---*@@@@@@@%+=====*@@@@@@@@@@@+=-----:::::...
......=................:%@%#=-:::::::--===---::---=*@@@@@@@@@@=::.............
.....::................-+==-::::--:::::::::::::--==*@@@@@@@@@=:.:.............
.....=:...............-==+*=-===-------::::::::--=+#@@@@@@@#=:..:.............
.....+................+++#@%#*@@@@%*--++=------==+*#@@@@+-*#:...:.............
....--...............:**#@@@@%++=--:::-+%+====+++*#%%*+=*+*=:...:.............
....=................-#%@@@@%**++++===+++*+=++**##%%%+=:-+=::...:.............
....++++++=-:::.....:+@@@@@@%%#**###%%#%%#+=**#%%%@@#+=+++::::..:.............
....+++++++++++++++++#@@@*++===-.:-==+*%%++*##%@@@@%#@%#*-:::...::............
...-+++**************#@@@@@@%###**+====+++*%%@@@@@@@%#@@+:::::..::............
...:::--===+++********#%@@@@@@%#*+=====++*%@@@@@@@@@%*#*::::::::::.::.........
.....::::::::::-------=+%#*+==-------==+*#%@@@@@@@@@*+:.....::#::::+*.........
......:::::::::::-----=#@@%%##++=====+#%#%%@@@@@@@@%+........=#::::*#:........
...::::.::::::::::---=*@@@@@@@@@@@@%%@@@@@@@@@@@@@%+..........::.::*%::.......
.::::::::::::::----:--*@@@@@@@@@@@@@@@@@@@@@@@@@%+=............:...=%::::.....
#=-----::-------:::::-=%@@@@@@@@@@@@@@@@@@@@@@#=-:...............:::=::.......
*****++**=+++=+=--------+#@@@@@@@@@@@@@@@@@@#+--....................:::::::::.
#+**#=#*++***%**+++#+++***%%@@@@@@@@@@@@@%#*=--......................:::::::::


    ...................,,BBBBBBBBBuod8B8bou,,.
              ..,uod8BBBBBBBBBBBBBBBBRPFT?l!i:.
         ,=m8BBBBBBBBBBBBBBBRPFT?!||||||||||||||
         !...:!TVBBBRPFT||||||||||!!^^""'   ||||
         !.......:!?|||||!!^^""'            ||||
         !.........||||                     ||||
         !.........||||  > Desenvolvedor:Alan|||       
         !.........||||    github.com/Mogutaa ||               
         !.........||||    linkedin.com/in/alan-jose-filho       
         !.........||||                     ||||                
         !.........||||                     ||||
         `.........||||                    ,||||
          .;.......||||               _.-!!|||||
   .,uodWBBBBb.....||||       _.-!!|||||||||!:'
!YBBBBBBBBBBBBBBb..!|||:..-!!|||||||!iof68BBBBBb....
!..YBBBBBBBBBBBBBBb!!||||||||!iof68BBBBBBRPFT?!::   `.
!....YBBBBBBBBBBBBBBbaaitf68BBBBBBRPFT?!:::::::::     `.
!......YBBBBBBBBBBBBBBBBBBBRPFT?!::::::;:!^"`;:::       `.
!........YBBBBBBBBBBRPFT?!::::::::::^''...::::::;         iBBbo.
`..........YBRPFT?!::::::::::::::::::::::::;iof68bo.      WBBBBbo.
  `..........:::::::::::::::::::::::;iof688888888888b.     `YBBBP^'
    `........::::::::::::::::;iof688888888888888888888b.     `
      `......:::::::::;iof688888888888888888888888888888b.
        `....:::;iof688888888888888888888888888888888899fT!
          `..::!8888888888888888888888888888888899fT|!^"'
            `' !!988888888888888888888888899fT|!^"'
                `!!8888888888888888899fT|!^"'
                  `!988888888899fT|!^"'
                    `!9899fT|!^"'
                      `!^"'"####;

/// Menu printed when /newpost enters edit mode.
pub const EDIT_MENU: &str = r####"Modo edição ativado

Comandos disponíveis:
/title <texto>  - Definir título
/type <tipo>    - Escolher tipo
/tags <lista>   - Adicionar tags
Digite o conteúdo linha por linha

Finalize com:
/salvar    - Salvar post
/cancelar  - Cancelar edição"####;
